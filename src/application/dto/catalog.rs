use crate::domain::{casting::Casting, genre::Genre};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenreDto {
    pub id: i64,
    pub name: String,
}

impl From<Genre> for GenreDto {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id.into(),
            name: genre.name.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CastingDto {
    pub id: i64,
    pub real_name: String,
    pub stage_name: String,
    pub photo: Option<String>,
}

impl From<Casting> for CastingDto {
    fn from(casting: Casting) -> Self {
        Self {
            id: casting.id.into(),
            real_name: casting.real_name.into(),
            stage_name: casting.stage_name.into(),
            photo: casting.photo,
        }
    }
}
