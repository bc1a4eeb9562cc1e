use super::CatalogCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, GenreDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        genre::{GenreId, GenreName},
        user::{Action, Resource},
    },
};

pub struct CreateGenreCommand {
    pub name: String,
}

pub struct RenameGenreCommand {
    pub id: i64,
    pub name: String,
}

impl CatalogCommandService {
    pub async fn create_genre(
        &self,
        actor: &AuthenticatedUser,
        command: CreateGenreCommand,
    ) -> ApplicationResult<GenreDto> {
        ensure_capability(actor, Resource::Genres, Action::Create)?;
        let genre = self.genres.insert(GenreName::new(command.name)?).await?;
        Ok(genre.into())
    }

    pub async fn rename_genre(
        &self,
        actor: &AuthenticatedUser,
        command: RenameGenreCommand,
    ) -> ApplicationResult<GenreDto> {
        ensure_capability(actor, Resource::Genres, Action::UpdateAny)?;
        let id = GenreId::new(command.id)?;
        let name = GenreName::new(command.name)?;
        let genre = self.genres.rename(id, name).await?;
        Ok(genre.into())
    }

    /// Removes the genre and every film relation pointing at it.
    pub async fn delete_genre(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        ensure_capability(actor, Resource::Genres, Action::DeleteAny)?;
        let id = GenreId::new(id)?;
        if self.genres.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("genre not found"));
        }
        self.genres.delete(id).await?;
        Ok(())
    }
}
