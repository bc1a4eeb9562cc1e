use super::ReviewCommandService;
use crate::{
    application::{
        commands::capability::{ensure_can_mutate, ensure_capability},
        dto::{AuthenticatedUser, RatingDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        film::FilmId,
        policy::Mutation,
        review::{NewRating, Rating, RatingId, Score},
        user::{Action, Resource},
    },
};

/// A rating must reference the caller's own top-level comment on the film.
pub struct CreateRatingCommand {
    pub film_id: i64,
    pub comment_id: Option<i64>,
    pub score: i16,
}

pub struct UpdateRatingCommand {
    pub id: i64,
    pub score: i16,
}

impl ReviewCommandService {
    pub async fn create_rating(
        &self,
        actor: &AuthenticatedUser,
        command: CreateRatingCommand,
    ) -> ApplicationResult<RatingDto> {
        ensure_capability(actor, Resource::Ratings, Action::Create)?;

        let film_id = FilmId::new(command.film_id)?;
        let score = Score::new(command.score)?;
        let comment_id = command.comment_id.ok_or_else(|| {
            ApplicationError::validation("a rating must be submitted with a comment")
        })?;
        self.ensure_film_exists(film_id).await?;

        let comment = self.load_comment(comment_id).await?;
        if comment.film_id != film_id {
            return Err(ApplicationError::validation(
                "the comment belongs to a different film",
            ));
        }
        let new_rating = NewRating::for_comment(actor.id, &comment, score)?;

        if self
            .reviews
            .find_rating_for(actor.id, film_id)
            .await?
            .is_some()
        {
            return Err(ApplicationError::conflict("you have already rated this film"));
        }

        let rating = self.reviews.insert_rating(new_rating).await?;
        Ok(rating.into())
    }

    pub async fn update_rating(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateRatingCommand,
    ) -> ApplicationResult<RatingDto> {
        let rating = self.load_rating(command.id).await?;
        ensure_can_mutate(actor, Resource::Ratings, Mutation::Update, Some(rating.user_id))?;

        let score = Score::new(command.score)?;
        let updated = self.reviews.update_rating(rating.id, score).await?;
        Ok(updated.into())
    }

    pub async fn delete_rating(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        let rating = self.load_rating(id).await?;
        ensure_can_mutate(actor, Resource::Ratings, Mutation::Delete, Some(rating.user_id))?;

        self.reviews.delete_rating(rating.id).await?;
        Ok(())
    }

    async fn load_rating(&self, id: i64) -> ApplicationResult<Rating> {
        let id = RatingId::new(id)?;
        self.reviews
            .find_rating(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("rating not found"))
    }
}
