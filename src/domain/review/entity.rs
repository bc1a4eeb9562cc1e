use chrono::{DateTime, Utc};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::film::FilmId;
use crate::domain::review::value_objects::{CommentContent, CommentId, RatingId, Score};
use crate::domain::user::{Role, UserId};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub user_id: UserId,
    pub film_id: FilmId,
    pub content: CommentContent,
    pub reply_to: Option<CommentId>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_reply(&self) -> bool {
        self.reply_to.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub user_id: UserId,
    pub film_id: FilmId,
    pub content: CommentContent,
    pub reply_to: Option<CommentId>,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    /// Builds a top-level comment, or a reply when `parent` is given. A reply must target
    /// a comment on the same film and cannot carry a score.
    pub fn new(
        user_id: UserId,
        film_id: FilmId,
        content: CommentContent,
        parent: Option<&Comment>,
        score: Option<Score>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if let Some(parent) = parent {
            if parent.film_id != film_id {
                return Err(DomainError::Validation(
                    "a reply must target a comment on the same film".into(),
                ));
            }
            if score.is_some() {
                return Err(DomainError::Validation("a reply cannot carry a score".into()));
            }
        }
        Ok(Self {
            user_id,
            film_id,
            content,
            reply_to: parent.map(|p| p.id),
            created_at,
        })
    }

    pub fn is_reply(&self) -> bool {
        self.reply_to.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Rating {
    pub id: RatingId,
    pub user_id: UserId,
    pub film_id: FilmId,
    pub score: Score,
    pub comment_id: Option<CommentId>,
}

#[derive(Debug, Clone)]
pub struct NewRating {
    pub user_id: UserId,
    pub film_id: FilmId,
    pub score: Score,
    pub comment_id: CommentId,
}

impl NewRating {
    /// A rating always hangs off the rater's own top-level comment on the same film.
    pub fn for_comment(user_id: UserId, comment: &Comment, score: Score) -> DomainResult<Self> {
        if comment.user_id != user_id {
            return Err(DomainError::Validation(
                "a rating must reference your own comment".into(),
            ));
        }
        if comment.is_reply() {
            return Err(DomainError::Validation(
                "a rating cannot be attached to a reply".into(),
            ));
        }
        Ok(Self {
            user_id,
            film_id: comment.film_id,
            score,
            comment_id: comment.id,
        })
    }
}

/// Public profile of a comment author.
#[derive(Debug, Clone)]
pub struct CommentAuthor {
    pub id: UserId,
    pub name: String,
    pub image: Option<String>,
    pub role: Role,
}

/// A comment as shown on the film page, with its author and linked rating.
#[derive(Debug, Clone)]
pub struct CommentEntry {
    pub comment: Comment,
    pub author: CommentAuthor,
    pub rating: Option<Rating>,
}
