use super::CatalogCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, CastingDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        casting::{CastingChanges, CastingId, NewCasting, PersonName},
        user::{Action, Resource},
    },
};

pub struct CreateCastingCommand {
    pub real_name: String,
    pub stage_name: String,
    pub photo: Option<String>,
}

pub struct UpdateCastingCommand {
    pub id: i64,
    pub real_name: Option<String>,
    pub stage_name: Option<String>,
    pub photo: Option<Option<String>>,
}

impl CatalogCommandService {
    pub async fn create_casting(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCastingCommand,
    ) -> ApplicationResult<CastingDto> {
        ensure_capability(actor, Resource::Castings, Action::Create)?;
        let casting = self
            .castings
            .insert(NewCasting {
                real_name: PersonName::new(command.real_name)?,
                stage_name: PersonName::new(command.stage_name)?,
                photo: command.photo.filter(|url| !url.trim().is_empty()),
            })
            .await?;
        Ok(casting.into())
    }

    pub async fn update_casting(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCastingCommand,
    ) -> ApplicationResult<CastingDto> {
        ensure_capability(actor, Resource::Castings, Action::UpdateAny)?;
        let id = CastingId::new(command.id)?;
        let mut casting = self
            .castings
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("casting not found"))?;

        casting.apply(CastingChanges {
            real_name: command.real_name.map(PersonName::new).transpose()?,
            stage_name: command.stage_name.map(PersonName::new).transpose()?,
            photo: command.photo,
        });
        let updated = self.castings.update(&casting).await?;
        Ok(updated.into())
    }

    /// Removes the cast member and every film relation pointing at them.
    pub async fn delete_casting(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, Resource::Castings, Action::DeleteAny)?;
        let id = CastingId::new(id)?;
        if self.castings.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("casting not found"));
        }
        self.castings.delete(id).await?;
        Ok(())
    }
}
