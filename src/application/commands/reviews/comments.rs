use super::ReviewCommandService;
use crate::{
    application::{
        commands::capability::{ensure_can_mutate, ensure_capability},
        dto::{AuthenticatedUser, CommentDto, SubmittedCommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        film::FilmId,
        policy::Mutation,
        review::{Comment, CommentContent, CommentId, NewComment, Score},
        user::{Action, Resource},
    },
};

pub struct SubmitCommentCommand {
    pub film_id: i64,
    pub content: String,
    pub reply_to_comment_id: Option<i64>,
    pub score: Option<i16>,
}

pub struct UpdateCommentCommand {
    pub id: i64,
    pub content: String,
}

impl ReviewCommandService {
    /// Posts a top-level comment (optionally with a score) or a reply.
    ///
    /// A user gets one top-level comment and one rating per film; replies are unbounded.
    pub async fn submit_comment(
        &self,
        actor: &AuthenticatedUser,
        command: SubmitCommentCommand,
    ) -> ApplicationResult<SubmittedCommentDto> {
        ensure_capability(actor, Resource::Comments, Action::Create)?;

        let film_id = FilmId::new(command.film_id)?;
        let content = CommentContent::new(command.content)?;
        let score = command.score.map(Score::new).transpose()?;
        if score.is_some() {
            ensure_capability(actor, Resource::Ratings, Action::Create)?;
        }
        self.ensure_film_exists(film_id).await?;

        let parent = match command.reply_to_comment_id {
            Some(parent_id) => Some(self.load_comment(parent_id).await?),
            None => None,
        };
        let new_comment = NewComment::new(
            actor.id,
            film_id,
            content,
            parent.as_ref(),
            score,
            self.clock.now(),
        )?;

        if !new_comment.is_reply() {
            if self
                .reviews
                .find_top_level_comment(actor.id, film_id)
                .await?
                .is_some()
            {
                return Err(ApplicationError::conflict(
                    "you have already commented on this film",
                ));
            }
            if score.is_some()
                && self
                    .reviews
                    .find_rating_for(actor.id, film_id)
                    .await?
                    .is_some()
            {
                return Err(ApplicationError::conflict("you have already rated this film"));
            }
        }

        let (comment, rating) = self.reviews.insert_comment(new_comment, score).await?;
        Ok(SubmittedCommentDto {
            comment: comment.into(),
            rating: rating.map(Into::into),
        })
    }

    pub async fn update_comment(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let comment = self.load_comment(command.id).await?;
        ensure_can_mutate(
            actor,
            Resource::Comments,
            Mutation::Update,
            Some(comment.user_id),
        )?;

        let content = CommentContent::new(command.content)?;
        let updated = self.reviews.update_comment(comment.id, content).await?;
        Ok(updated.into())
    }

    /// Deletes the comment, its replies and the ratings linked to them.
    pub async fn delete_comment(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        let comment = self.load_comment(id).await?;
        ensure_can_mutate(
            actor,
            Resource::Comments,
            Mutation::Delete,
            Some(comment.user_id),
        )?;

        self.reviews.delete_comment(comment.id).await?;
        Ok(())
    }

    pub(super) async fn load_comment(&self, id: i64) -> ApplicationResult<Comment> {
        let id = CommentId::new(id)?;
        self.reviews
            .find_comment(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))
    }
}
