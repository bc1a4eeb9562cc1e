use crate::domain::relation::{
    CastingRelation, CastingRelationDetail, GenreRelation, GenreRelationDetail,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::catalog::{CastingDto, GenreDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenreRelationDto {
    pub id: i64,
    pub film_id: i64,
    pub genre_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<GenreDto>,
}

impl From<GenreRelation> for GenreRelationDto {
    fn from(rel: GenreRelation) -> Self {
        Self {
            id: rel.id.into(),
            film_id: rel.film_id.into(),
            genre_id: rel.genre_id.into(),
            genre: None,
        }
    }
}

impl From<GenreRelationDetail> for GenreRelationDto {
    fn from(detail: GenreRelationDetail) -> Self {
        Self {
            genre: Some(detail.genre.into()),
            ..detail.relation.into()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CastingRelationDto {
    pub id: i64,
    pub film_id: i64,
    pub casting_id: i64,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub casting: Option<CastingDto>,
}

impl From<CastingRelation> for CastingRelationDto {
    fn from(rel: CastingRelation) -> Self {
        Self {
            id: rel.id.into(),
            film_id: rel.film_id.into(),
            casting_id: rel.casting_id.into(),
            role: rel.role.into(),
            casting: None,
        }
    }
}

impl From<CastingRelationDetail> for CastingRelationDto {
    fn from(detail: CastingRelationDetail) -> Self {
        Self {
            casting: Some(detail.casting.into()),
            ..detail.relation.into()
        }
    }
}
