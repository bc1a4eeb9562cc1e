use crate::domain::errors::DomainResult;
use crate::domain::film::FilmId;
use crate::domain::review::average::RatingSample;
use crate::domain::review::entity::{Comment, CommentEntry, NewComment, NewRating, Rating};
use crate::domain::review::value_objects::{CommentContent, CommentId, RatingId, Score};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_comment(&self, id: CommentId) -> DomainResult<Option<Comment>>;

    async fn find_top_level_comment(
        &self,
        user_id: UserId,
        film_id: FilmId,
    ) -> DomainResult<Option<Comment>>;

    /// Inserts the comment and, when `score` is given, its linked rating in one
    /// transaction. Duplicates surface as `Conflict`.
    async fn insert_comment(
        &self,
        comment: NewComment,
        score: Option<Score>,
    ) -> DomainResult<(Comment, Option<Rating>)>;

    async fn update_comment(&self, id: CommentId, content: CommentContent)
    -> DomainResult<Comment>;

    /// Deletes the comment, its replies, and every rating linked to any of them.
    async fn delete_comment(&self, id: CommentId) -> DomainResult<()>;

    async fn list_comments(&self, film_id: Option<FilmId>) -> DomainResult<Vec<CommentEntry>>;

    async fn find_rating(&self, id: RatingId) -> DomainResult<Option<Rating>>;

    async fn find_rating_for(
        &self,
        user_id: UserId,
        film_id: FilmId,
    ) -> DomainResult<Option<Rating>>;

    async fn insert_rating(&self, rating: NewRating) -> DomainResult<Rating>;

    async fn update_rating(&self, id: RatingId, score: Score) -> DomainResult<Rating>;

    async fn delete_rating(&self, id: RatingId) -> DomainResult<()>;

    async fn list_ratings(&self, film_id: Option<FilmId>) -> DomainResult<Vec<Rating>>;

    async fn rating_samples(&self, film_id: FilmId) -> DomainResult<Vec<RatingSample>>;
}
