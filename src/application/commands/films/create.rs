use super::FilmCommandService;
use crate::{
    application::{
        commands::{
            capability::ensure_capability,
            links::{CastingAssignmentInput, resolve_genres, resolve_lineup},
        },
        dto::{AuthenticatedUser, FilmDto},
        error::ApplicationResult,
    },
    domain::{
        film::{Category, FilmDescription, FilmDetails, FilmLinks, FilmTitle, NewFilm},
        user::{Action, Resource},
    },
};

pub struct CreateFilmCommand {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub episode: Option<i32>,
    pub poster_url: Option<String>,
    pub trailer_url: Option<String>,
    pub duration: Option<i32>,
    pub release_year: Option<i32>,
    pub genre_ids: Vec<i64>,
    pub castings: Vec<CastingAssignmentInput>,
}

impl FilmCommandService {
    /// Creates the film together with its genre and cast relations as one unit.
    pub async fn create_film(
        &self,
        actor: &AuthenticatedUser,
        command: CreateFilmCommand,
    ) -> ApplicationResult<FilmDto> {
        ensure_capability(actor, Resource::Films, Action::Create)?;

        let title = FilmTitle::new(command.title)?;
        let description = FilmDescription::new(command.description)?;
        let details = FilmDetails {
            poster_url: command.poster_url,
            trailer_url: command.trailer_url,
            duration: command.duration,
            release_year: command.release_year,
        };
        let episode = command.category.normalize_episode(command.episode)?;

        let links = FilmLinks {
            genres: resolve_genres(self.genres.as_ref(), command.genre_ids).await?,
            castings: resolve_lineup(self.castings.as_ref(), command.castings).await?,
        };

        let slug = self.slug_service.generate_unique_slug(&title).await?;
        let new_film = NewFilm::new(
            title,
            slug,
            description,
            command.category,
            episode,
            details,
            actor.id,
            self.clock.now(),
        )?;

        let film = self.films.insert(new_film, links).await?;
        tracing::info!(film_id = %film.id, slug = %film.slug, "film created");
        Ok(film.into())
    }
}
