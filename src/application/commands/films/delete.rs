use super::FilmCommandService;
use crate::{
    application::{
        commands::capability::ensure_can_mutate,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{film::FilmId, policy::Mutation, user::Resource},
};

pub struct DeleteFilmCommand {
    pub id: i64,
}

impl FilmCommandService {
    /// Deletes the film along with its ratings, comments and relations.
    pub async fn delete_film(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteFilmCommand,
    ) -> ApplicationResult<()> {
        let id = FilmId::new(command.id)?;
        let film = self
            .films
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("film not found"))?;

        ensure_can_mutate(actor, Resource::Films, Mutation::Delete, Some(film.owner_id))?;

        self.films.delete(id).await?;
        tracing::info!(film_id = %id, actor = %actor.id, "film deleted");
        Ok(())
    }
}
