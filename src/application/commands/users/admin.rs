use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Action, DisplayName, Email, Resource, Role, UserId, UserUpdate},
};

use super::UserCommandService;

pub struct UpdateUserCommand {
    pub user_id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    pub image: Option<Option<String>>,
}

pub struct DeleteUserCommand {
    pub user_id: i64,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        ensure_capability(actor, Resource::Users, Action::UpdateAny)?;

        let user_id = UserId::new(command.user_id)?;
        let mut update = UserUpdate::new(user_id);

        if let Some(name) = command.name {
            update = update.with_name(DisplayName::new(name)?);
        }
        if let Some(email) = command.email {
            update = update.with_email(Email::new(email)?);
        }
        if let Some(role) = command.role {
            if user_id == actor.id && role != Role::Admin {
                return Err(ApplicationError::validation(
                    "you cannot demote your own account",
                ));
            }
            update = update.with_role(role);
        }
        if let Some(is_active) = command.is_active {
            if user_id == actor.id && !is_active {
                return Err(ApplicationError::validation(
                    "you cannot deactivate your own account",
                ));
            }
            update = update.with_is_active(is_active);
        }
        if let Some(image) = command.image {
            update = update.with_image(image.filter(|url| !url.trim().is_empty()));
        }

        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let user = self.user_repo.update(update).await?;
        tracing::info!(actor = %actor.id, user_id = %user.id, "user updated by administrator");
        Ok(user.into())
    }

    /// Removes the account along with its comments and ratings.
    pub async fn delete_user(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteUserCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, Resource::Users, Action::DeleteAny)?;

        let user_id = UserId::new(command.user_id)?;
        if user_id == actor.id {
            return Err(ApplicationError::validation(
                "you cannot delete your own account",
            ));
        }

        self.user_repo.delete(user_id).await?;
        tracing::info!(actor = %actor.id, user_id = %user_id, "user deleted");
        Ok(())
    }
}
