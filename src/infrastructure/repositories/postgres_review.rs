// src/infrastructure/repositories/postgres_review.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::film::FilmId;
use crate::domain::review::{
    Comment, CommentAuthor, CommentContent, CommentEntry, CommentId, NewComment, NewRating,
    Rating, RatingId, RatingSample, ReviewRepository, Score,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COMMENT_COLUMNS: &str = "id, user_id, film_id, content, reply_to_comment_id, created_at";
const RATING_COLUMNS: &str = "id, user_id, film_id, score, comment_id";

#[derive(Clone)]
pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    user_id: i64,
    film_id: i64,
    content: String,
    reply_to_comment_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            film_id: FilmId::new(row.film_id)?,
            content: CommentContent::new(row.content)?,
            reply_to: row.reply_to_comment_id.map(CommentId::new).transpose()?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct RatingRow {
    id: i64,
    user_id: i64,
    film_id: i64,
    score: i16,
    comment_id: Option<i64>,
}

impl TryFrom<RatingRow> for Rating {
    type Error = DomainError;

    fn try_from(row: RatingRow) -> Result<Self, Self::Error> {
        Ok(Rating {
            id: RatingId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            film_id: FilmId::new(row.film_id)?,
            score: Score::new(row.score)?,
            comment_id: row.comment_id.map(CommentId::new).transpose()?,
        })
    }
}

#[derive(Debug, FromRow)]
struct CommentEntryRow {
    id: i64,
    user_id: i64,
    film_id: i64,
    content: String,
    reply_to_comment_id: Option<i64>,
    created_at: DateTime<Utc>,
    author_name: String,
    author_image: Option<String>,
    author_role: String,
    rating_id: Option<i64>,
    rating_score: Option<i16>,
}

impl TryFrom<CommentEntryRow> for CommentEntry {
    type Error = DomainError;

    fn try_from(row: CommentEntryRow) -> Result<Self, Self::Error> {
        let comment = Comment::try_from(CommentRow {
            id: row.id,
            user_id: row.user_id,
            film_id: row.film_id,
            content: row.content,
            reply_to_comment_id: row.reply_to_comment_id,
            created_at: row.created_at,
        })?;
        let rating = match (row.rating_id, row.rating_score) {
            (Some(id), Some(score)) => Some(Rating {
                id: RatingId::new(id)?,
                user_id: comment.user_id,
                film_id: comment.film_id,
                score: Score::new(score)?,
                comment_id: Some(comment.id),
            }),
            _ => None,
        };
        Ok(CommentEntry {
            author: CommentAuthor {
                id: comment.user_id,
                name: row.author_name,
                image: row.author_image,
                role: row.author_role.parse()?,
            },
            comment,
            rating,
        })
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn find_comment(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn find_top_level_comment(
        &self,
        user_id: UserId,
        film_id: FilmId,
    ) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE user_id = $1 AND film_id = $2 AND reply_to_comment_id IS NULL"
        ))
        .bind(i64::from(user_id))
        .bind(i64::from(film_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn insert_comment(
        &self,
        comment: NewComment,
        score: Option<Score>,
    ) -> DomainResult<(Comment, Option<Rating>)> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (user_id, film_id, content, reply_to_comment_id, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(i64::from(comment.user_id))
        .bind(i64::from(comment.film_id))
        .bind(comment.content.as_str())
        .bind(comment.reply_to.map(i64::from))
        .bind(comment.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;
        let created = Comment::try_from(row)?;

        let rating = match score {
            Some(score) => {
                let row = sqlx::query_as::<_, RatingRow>(&format!(
                    "INSERT INTO ratings (user_id, film_id, score, comment_id)
                     VALUES ($1, $2, $3, $4)
                     RETURNING {RATING_COLUMNS}"
                ))
                .bind(i64::from(created.user_id))
                .bind(i64::from(created.film_id))
                .bind(score.value())
                .bind(i64::from(created.id))
                .fetch_one(&mut *tx)
                .await
                .map_err(map_sqlx)?;
                Some(Rating::try_from(row)?)
            }
            None => None,
        };

        tx.commit().await.map_err(map_sqlx)?;
        Ok((created, rating))
    }

    async fn update_comment(
        &self,
        id: CommentId,
        content: CommentContent,
    ) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "UPDATE comments SET content = $1 WHERE id = $2 RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(content.as_str())
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;

        Comment::try_from(row)
    }

    async fn delete_comment(&self, id: CommentId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let thread = sqlx::query_scalar::<_, i64>(
            "WITH RECURSIVE thread AS (
                 SELECT id FROM comments WHERE id = $1
                 UNION ALL
                 SELECT c.id FROM comments c JOIN thread t ON c.reply_to_comment_id = t.id
             )
             SELECT id FROM thread",
        )
        .bind(i64::from(id))
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx)?;
        if thread.is_empty() {
            return Err(DomainError::NotFound("comment not found".into()));
        }

        sqlx::query("DELETE FROM ratings WHERE comment_id = ANY($1)")
            .bind(&thread)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        sqlx::query("DELETE FROM comments WHERE id = ANY($1)")
            .bind(&thread)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }

    async fn list_comments(&self, film_id: Option<FilmId>) -> DomainResult<Vec<CommentEntry>> {
        let rows = sqlx::query_as::<_, CommentEntryRow>(
            "SELECT c.id, c.user_id, c.film_id, c.content, c.reply_to_comment_id, c.created_at,
                    u.name AS author_name, u.image AS author_image, u.role AS author_role,
                    r.id AS rating_id, r.score AS rating_score
             FROM comments c
             JOIN users u ON u.id = c.user_id
             LEFT JOIN ratings r ON r.comment_id = c.id
             WHERE $1::BIGINT IS NULL OR c.film_id = $1
             ORDER BY c.created_at, c.id",
        )
        .bind(film_id.map(i64::from))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(CommentEntry::try_from).collect()
    }

    async fn find_rating(&self, id: RatingId) -> DomainResult<Option<Rating>> {
        let row = sqlx::query_as::<_, RatingRow>(&format!(
            "SELECT {RATING_COLUMNS} FROM ratings WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Rating::try_from).transpose()
    }

    async fn find_rating_for(
        &self,
        user_id: UserId,
        film_id: FilmId,
    ) -> DomainResult<Option<Rating>> {
        let row = sqlx::query_as::<_, RatingRow>(&format!(
            "SELECT {RATING_COLUMNS} FROM ratings WHERE user_id = $1 AND film_id = $2"
        ))
        .bind(i64::from(user_id))
        .bind(i64::from(film_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Rating::try_from).transpose()
    }

    async fn insert_rating(&self, rating: NewRating) -> DomainResult<Rating> {
        let row = sqlx::query_as::<_, RatingRow>(&format!(
            "INSERT INTO ratings (user_id, film_id, score, comment_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {RATING_COLUMNS}"
        ))
        .bind(i64::from(rating.user_id))
        .bind(i64::from(rating.film_id))
        .bind(rating.score.value())
        .bind(i64::from(rating.comment_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Rating::try_from(row)
    }

    async fn update_rating(&self, id: RatingId, score: Score) -> DomainResult<Rating> {
        let row = sqlx::query_as::<_, RatingRow>(&format!(
            "UPDATE ratings SET score = $1 WHERE id = $2 RETURNING {RATING_COLUMNS}"
        ))
        .bind(score.value())
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("rating not found".into()))?;

        Rating::try_from(row)
    }

    async fn delete_rating(&self, id: RatingId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM ratings WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("rating not found".into()));
        }
        Ok(())
    }

    async fn list_ratings(&self, film_id: Option<FilmId>) -> DomainResult<Vec<Rating>> {
        let rows = sqlx::query_as::<_, RatingRow>(&format!(
            "SELECT {RATING_COLUMNS} FROM ratings
             WHERE $1::BIGINT IS NULL OR film_id = $1
             ORDER BY id"
        ))
        .bind(film_id.map(i64::from))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Rating::try_from).collect()
    }

    async fn rating_samples(&self, film_id: FilmId) -> DomainResult<Vec<RatingSample>> {
        let rows = sqlx::query_as::<_, (i16, String)>(
            "SELECT r.score, u.role FROM ratings r
             JOIN users u ON u.id = r.user_id
             WHERE r.film_id = $1",
        )
        .bind(i64::from(film_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|(score, role)| {
                Ok(RatingSample {
                    score: Score::new(score)?,
                    author_role: role.parse()?,
                })
            })
            .collect()
    }
}
