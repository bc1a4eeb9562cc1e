use crate::domain::{
    review::{Comment, CommentAuthor, CommentEntry, Rating},
    user::Role,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingDto {
    pub id: i64,
    pub user_id: i64,
    pub film_id: i64,
    pub score: i16,
    pub comment_id: Option<i64>,
}

impl From<Rating> for RatingDto {
    fn from(rating: Rating) -> Self {
        Self {
            id: rating.id.into(),
            user_id: rating.user_id.into(),
            film_id: rating.film_id.into(),
            score: rating.score.into(),
            comment_id: rating.comment_id.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub user_id: i64,
    pub film_id: i64,
    pub content: String,
    pub reply_to_comment_id: Option<i64>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            user_id: comment.user_id.into(),
            film_id: comment.film_id.into(),
            content: comment.content.into(),
            reply_to_comment_id: comment.reply_to.map(Into::into),
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentAuthorDto {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub role: Role,
}

impl From<CommentAuthor> for CommentAuthorDto {
    fn from(author: CommentAuthor) -> Self {
        Self {
            id: author.id.into(),
            name: author.name,
            image: author.image,
            role: author.role,
        }
    }
}

/// A comment with its author and the rating submitted alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentEntryDto {
    #[serde(flatten)]
    pub comment: CommentDto,
    pub user: CommentAuthorDto,
    pub rating: Option<RatingDto>,
}

impl From<CommentEntry> for CommentEntryDto {
    fn from(entry: CommentEntry) -> Self {
        Self {
            comment: entry.comment.into(),
            user: entry.author.into(),
            rating: entry.rating.map(Into::into),
        }
    }
}

/// Result of a comment submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmittedCommentDto {
    pub comment: CommentDto,
    pub rating: Option<RatingDto>,
}
