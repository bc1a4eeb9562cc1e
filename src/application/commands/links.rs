//! Resolution of submitted genre ids and cast assignments into validated domain sets.

use std::collections::HashSet;

use crate::{
    application::{
        commands::capability::ensure_can_mutate,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        casting::{CastingId, CastingRepository},
        film::{Film, FilmId, FilmRepository},
        genre::{GenreId, GenreRepository},
        policy::Mutation,
        relation::{CastingAssignment, CastingLineup, CastingRole, GenreSelection},
        user::Resource,
    },
};

/// A cast entry as submitted by a client.
#[derive(Debug, Clone)]
pub struct CastingAssignmentInput {
    pub casting_id: i64,
    pub role: String,
    pub photo: Option<String>,
}

pub(crate) async fn resolve_genres(
    genres: &dyn GenreRepository,
    ids: Vec<i64>,
) -> ApplicationResult<GenreSelection> {
    let ids = ids
        .into_iter()
        .map(GenreId::new)
        .collect::<Result<Vec<_>, _>>()?;
    let selection = GenreSelection::new(ids);
    if selection.is_empty() {
        return Ok(selection);
    }

    let existing = genres.existing_ids(selection.as_slice()).await?;
    selection.ensure_all_exist(&existing)?;
    Ok(selection)
}

pub(crate) async fn resolve_lineup(
    castings: &dyn CastingRepository,
    inputs: Vec<CastingAssignmentInput>,
) -> ApplicationResult<CastingLineup> {
    let assignments = inputs
        .into_iter()
        .map(|input| {
            Ok(CastingAssignment {
                casting_id: CastingId::new(input.casting_id)?,
                role: CastingRole::new(input.role)?,
                photo: input.photo,
            })
        })
        .collect::<ApplicationResult<Vec<_>>>()?;
    let lineup = CastingLineup::new(assignments)?;
    if lineup.is_empty() {
        return Ok(lineup);
    }

    let wanted = lineup.casting_ids();
    let existing: HashSet<_> = castings.existing_ids(&wanted).await?.into_iter().collect();
    if let Some(missing) = wanted.iter().find(|id| !existing.contains(id)) {
        return Err(ApplicationError::not_found(format!(
            "casting {missing} not found"
        )));
    }
    Ok(lineup)
}

/// Loads the film and checks the actor may edit it or its relations.
pub(crate) async fn load_editable_film(
    films: &dyn FilmRepository,
    actor: &AuthenticatedUser,
    film_id: FilmId,
) -> ApplicationResult<Film> {
    let film = films
        .find_by_id(film_id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("film not found"))?;
    ensure_can_mutate(actor, Resource::Films, Mutation::Update, Some(film.owner_id))?;
    Ok(film)
}
