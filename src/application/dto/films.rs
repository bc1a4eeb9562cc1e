use crate::domain::film::{Category, Film};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    relations::{CastingRelationDto, GenreRelationDto},
    reviews::CommentEntryDto,
    serde_time,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilmDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub poster_url: Option<String>,
    pub trailer_url: Option<String>,
    pub duration: Option<i32>,
    pub release_year: Option<i32>,
    pub category: Category,
    pub episode: Option<i32>,
    pub user_id: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Film> for FilmDto {
    fn from(film: Film) -> Self {
        Self {
            id: film.id.into(),
            title: film.title.into(),
            slug: film.slug.into(),
            description: film.description.into(),
            poster_url: film.poster_url,
            trailer_url: film.trailer_url,
            duration: film.duration,
            release_year: film.release_year,
            category: film.category,
            episode: film.episode,
            user_id: film.owner_id.into(),
            created_at: film.created_at,
        }
    }
}

/// A film with its genres, as used by listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilmSummaryDto {
    #[serde(flatten)]
    pub film: FilmDto,
    pub genre_relations: Vec<GenreRelationDto>,
}

/// A film with every relation needed by its page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilmDetailDto {
    #[serde(flatten)]
    pub film: FilmDto,
    pub genre_relations: Vec<GenreRelationDto>,
    pub casting_relations: Vec<CastingRelationDto>,
    pub comments: Vec<CommentEntryDto>,
    pub avg_rating: f64,
}
