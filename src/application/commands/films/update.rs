use super::FilmCommandService;
use crate::{
    application::{
        commands::links::load_editable_film,
        dto::{AuthenticatedUser, FilmDto},
        error::ApplicationResult,
    },
    domain::film::{Category, FilmChanges, FilmDescription, FilmId, FilmTitle},
};

/// Partial film update. For the optional attributes `Some(None)` clears the value.
pub struct UpdateFilmCommand {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub episode: Option<Option<i32>>,
    pub poster_url: Option<Option<String>>,
    pub trailer_url: Option<Option<String>>,
    pub duration: Option<Option<i32>>,
    pub release_year: Option<Option<i32>>,
}

impl FilmCommandService {
    pub async fn update_film(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateFilmCommand,
    ) -> ApplicationResult<FilmDto> {
        let id = FilmId::new(command.id)?;
        let mut film = load_editable_film(self.films.as_ref(), actor, id).await?;

        let changes = FilmChanges {
            title: command.title.map(FilmTitle::new).transpose()?,
            description: command.description.map(FilmDescription::new).transpose()?,
            poster_url: command.poster_url,
            trailer_url: command.trailer_url,
            duration: command.duration,
            release_year: command.release_year,
            category: command.category,
            episode: command.episode,
        };
        film.apply(changes)?;

        let updated = self.films.update(&film).await?;
        Ok(updated.into())
    }
}
