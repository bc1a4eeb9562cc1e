use super::RelationCommandService;
use crate::{
    application::{
        commands::links::{CastingAssignmentInput, load_editable_film, resolve_lineup},
        dto::{AuthenticatedUser, CastingRelationDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        film::FilmId,
        relation::{CastingRelation, CastingRelationId, CastingRole},
    },
};

pub struct CreateCastingRelationCommand {
    pub film_id: i64,
    pub casting_id: i64,
    pub role: String,
}

pub struct UpdateCastingRelationCommand {
    pub id: i64,
    pub role: String,
}

/// Target cast of a film; the current cast is diffed against it.
pub struct SyncCastingsCommand {
    pub film_id: i64,
    pub castings: Vec<CastingAssignmentInput>,
}

impl RelationCommandService {
    pub async fn create_casting_relation(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCastingRelationCommand,
    ) -> ApplicationResult<CastingRelationDto> {
        let film_id = FilmId::new(command.film_id)?;
        load_editable_film(self.films.as_ref(), actor, film_id).await?;

        let lineup = resolve_lineup(
            self.castings.as_ref(),
            vec![CastingAssignmentInput {
                casting_id: command.casting_id,
                role: command.role,
                photo: None,
            }],
        )
        .await?;
        let Some(assignment) = lineup.assignments().first().cloned() else {
            return Err(ApplicationError::validation("casting is required"));
        };

        let relation = self
            .relations
            .create_casting_relation(film_id, assignment)
            .await?;
        Ok(relation.into())
    }

    pub async fn update_casting_relation(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCastingRelationCommand,
    ) -> ApplicationResult<CastingRelationDto> {
        let relation = self.load_editable_relation(actor, command.id).await?;
        let role = CastingRole::new(command.role)?;

        let updated = self
            .relations
            .update_casting_role(relation.id, role)
            .await?;
        Ok(updated.into())
    }

    pub async fn delete_casting_relation(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<()> {
        let relation = self.load_editable_relation(actor, id).await?;
        self.relations.delete_casting_relation(relation.id).await?;
        Ok(())
    }

    /// Reconciles the film's cast with the submitted lineup in one transaction: new cast
    /// members are linked, changed roles are updated in place, missing members unlinked.
    /// A `photo` on an entry overwrites the shared cast member's photo for every film.
    pub async fn sync_film_castings(
        &self,
        actor: &AuthenticatedUser,
        command: SyncCastingsCommand,
    ) -> ApplicationResult<Vec<CastingRelationDto>> {
        let film_id = FilmId::new(command.film_id)?;
        load_editable_film(self.films.as_ref(), actor, film_id).await?;

        let lineup = resolve_lineup(self.castings.as_ref(), command.castings).await?;
        let relations = self.relations.sync_castings(film_id, &lineup).await?;
        tracing::debug!(film_id = %film_id, count = relations.len(), "film cast synchronized");
        Ok(relations.into_iter().map(Into::into).collect())
    }

    async fn load_editable_relation(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<CastingRelation> {
        let id = CastingRelationId::new(id)?;
        let relation = self
            .relations
            .find_casting_relation(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("casting relation not found"))?;
        load_editable_film(self.films.as_ref(), actor, relation.film_id).await?;
        Ok(relation)
    }
}
