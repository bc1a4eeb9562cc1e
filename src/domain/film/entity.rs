// src/domain/film/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::film::value_objects::{
    Category, FilmDescription, FilmId, FilmSlug, FilmTitle, validate_duration,
    validate_release_year,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Film {
    pub id: FilmId,
    pub title: FilmTitle,
    pub slug: FilmSlug,
    pub description: FilmDescription,
    pub poster_url: Option<String>,
    pub trailer_url: Option<String>,
    pub duration: Option<i32>,
    pub release_year: Option<i32>,
    pub category: Category,
    pub episode: Option<i32>,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Optional film attributes shared by creation and update.
#[derive(Debug, Clone, Default)]
pub struct FilmDetails {
    pub poster_url: Option<String>,
    pub trailer_url: Option<String>,
    pub duration: Option<i32>,
    pub release_year: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewFilm {
    pub title: FilmTitle,
    pub slug: FilmSlug,
    pub description: FilmDescription,
    pub poster_url: Option<String>,
    pub trailer_url: Option<String>,
    pub duration: Option<i32>,
    pub release_year: Option<i32>,
    pub category: Category,
    pub episode: Option<i32>,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl NewFilm {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: FilmTitle,
        slug: FilmSlug,
        description: FilmDescription,
        category: Category,
        episode: Option<i32>,
        details: FilmDetails,
        owner_id: UserId,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            title,
            slug,
            description,
            poster_url: normalize_url(details.poster_url),
            trailer_url: normalize_url(details.trailer_url),
            duration: validate_duration(details.duration)?,
            release_year: validate_release_year(details.release_year)?,
            episode: category.normalize_episode(episode)?,
            category,
            owner_id,
            created_at,
        })
    }
}

/// Field-level changes for an existing film. `None` keeps the stored value; for the URL
/// fields `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct FilmChanges {
    pub title: Option<FilmTitle>,
    pub description: Option<FilmDescription>,
    pub poster_url: Option<Option<String>>,
    pub trailer_url: Option<Option<String>>,
    pub duration: Option<Option<i32>>,
    pub release_year: Option<Option<i32>>,
    pub category: Option<Category>,
    pub episode: Option<Option<i32>>,
}

impl Film {
    /// Merges `changes` into the film and re-validates the category/episode rule on the
    /// merged state. The slug is left untouched.
    pub fn apply(&mut self, changes: FilmChanges) -> DomainResult<()> {
        let FilmChanges {
            title,
            description,
            poster_url,
            trailer_url,
            duration,
            release_year,
            category,
            episode,
        } = changes;

        let category = category.unwrap_or(self.category);
        let episode = category.normalize_episode(episode.unwrap_or(self.episode))?;
        let duration = validate_duration(duration.unwrap_or(self.duration))?;
        let release_year = validate_release_year(release_year.unwrap_or(self.release_year))?;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(poster_url) = poster_url {
            self.poster_url = normalize_url(poster_url);
        }
        if let Some(trailer_url) = trailer_url {
            self.trailer_url = normalize_url(trailer_url);
        }
        self.category = category;
        self.episode = episode;
        self.duration = duration;
        self.release_year = release_year;
        Ok(())
    }
}

fn normalize_url(value: Option<String>) -> Option<String> {
    value
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}
