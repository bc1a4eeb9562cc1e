// src/infrastructure/repositories/postgres_film.rs
use super::{
    map_sqlx,
    postgres_relation::{apply_photo_overrides, insert_casting_link, insert_genre_links},
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::film::{
    Film, FilmDescription, FilmId, FilmLinks, FilmRepository, FilmSlug, FilmTitle, NewFilm,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const FILM_COLUMNS: &str = "id, title, slug, description, poster_url, trailer_url, duration, \
                            release_year, category, episode, user_id, created_at";

#[derive(Clone)]
pub struct PostgresFilmRepository {
    pool: PgPool,
}

impl PostgresFilmRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FilmRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
    poster_url: Option<String>,
    trailer_url: Option<String>,
    duration: Option<i32>,
    release_year: Option<i32>,
    category: String,
    episode: Option<i32>,
    user_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<FilmRow> for Film {
    type Error = DomainError;

    fn try_from(row: FilmRow) -> Result<Self, Self::Error> {
        Ok(Film {
            id: FilmId::new(row.id)?,
            title: FilmTitle::new(row.title)?,
            slug: FilmSlug::new(row.slug)?,
            description: FilmDescription::new(row.description)?,
            poster_url: row.poster_url,
            trailer_url: row.trailer_url,
            duration: row.duration,
            release_year: row.release_year,
            category: row.category.parse()?,
            episode: row.episode,
            owner_id: UserId::new(row.user_id)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl FilmRepository for PostgresFilmRepository {
    async fn insert(&self, film: NewFilm, links: FilmLinks) -> DomainResult<Film> {
        let NewFilm {
            title,
            slug,
            description,
            poster_url,
            trailer_url,
            duration,
            release_year,
            category,
            episode,
            owner_id,
            created_at,
        } = film;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, FilmRow>(&format!(
            "INSERT INTO films (title, slug, description, poster_url, trailer_url, duration,
                                release_year, category, episode, user_id, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {FILM_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(description.as_str())
        .bind(poster_url)
        .bind(trailer_url)
        .bind(duration)
        .bind(release_year)
        .bind(category.as_str())
        .bind(episode)
        .bind(i64::from(owner_id))
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;
        let film = Film::try_from(row)?;

        insert_genre_links(&mut tx, film.id, links.genres.as_slice()).await?;
        for assignment in links.castings.assignments() {
            insert_casting_link(&mut tx, film.id, assignment).await?;
        }
        apply_photo_overrides(&mut tx, &links.castings).await?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(film)
    }

    async fn update(&self, film: &Film) -> DomainResult<Film> {
        let row = sqlx::query_as::<_, FilmRow>(&format!(
            "UPDATE films SET title = $1, description = $2, poster_url = $3, trailer_url = $4,
                    duration = $5, release_year = $6, category = $7, episode = $8
             WHERE id = $9
             RETURNING {FILM_COLUMNS}"
        ))
        .bind(film.title.as_str())
        .bind(film.description.as_str())
        .bind(film.poster_url.as_deref())
        .bind(film.trailer_url.as_deref())
        .bind(film.duration)
        .bind(film.release_year)
        .bind(film.category.as_str())
        .bind(film.episode)
        .bind(i64::from(film.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("film not found".into()))?;

        Film::try_from(row)
    }

    async fn delete(&self, id: FilmId) -> DomainResult<()> {
        let id = i64::from(id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        for statement in [
            "DELETE FROM ratings WHERE film_id = $1",
            "DELETE FROM comments WHERE film_id = $1",
            "DELETE FROM genre_relations WHERE film_id = $1",
            "DELETE FROM casting_relations WHERE film_id = $1",
        ] {
            sqlx::query(statement)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        let result = sqlx::query("DELETE FROM films WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("film not found".into()));
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }

    async fn find_by_id(&self, id: FilmId) -> DomainResult<Option<Film>> {
        let row = sqlx::query_as::<_, FilmRow>(&format!(
            "SELECT {FILM_COLUMNS} FROM films WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Film::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &FilmSlug) -> DomainResult<Option<Film>> {
        let row = sqlx::query_as::<_, FilmRow>(&format!(
            "SELECT {FILM_COLUMNS} FROM films WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Film::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Film>> {
        let rows = sqlx::query_as::<_, FilmRow>(&format!(
            "SELECT {FILM_COLUMNS} FROM films ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Film::try_from).collect()
    }
}
