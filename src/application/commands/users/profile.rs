use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{DisplayName, Email, PasswordHash, UserUpdate},
};

/// Self-service profile edit. Role and active flag are not editable here.
pub struct UpdateProfileCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<Option<String>>,
    pub password: Option<String>,
    /// Required when the email or password changes.
    pub current_password: Option<String>,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let current = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthenticated("account no longer exists"))?;

        let email = command.email.map(Email::new).transpose()?;
        let changes_email = email.as_ref().is_some_and(|email| *email != current.email);
        if changes_email || command.password.is_some() {
            let password = command.current_password.as_deref().ok_or_else(|| {
                ApplicationError::validation("current password is required")
            })?;
            self.password_hasher
                .verify(password, current.password_hash.as_str())
                .await?;
        }

        let mut update = UserUpdate::new(actor.id);

        if let Some(name) = command.name {
            update = update.with_name(DisplayName::new(name)?);
        }
        if let Some(email) = email {
            if let Some(other) = self.user_repo.find_by_email(&email).await?
                && other.id != actor.id
            {
                return Err(ApplicationError::conflict("email is already registered"));
            }
            update = update.with_email(email);
        }
        if let Some(image) = command.image {
            update = update.with_image(image.filter(|url| !url.trim().is_empty()));
        }
        if let Some(password) = command.password {
            validate_password(&password)?;
            let hashed = self.password_hasher.hash(&password).await?;
            update = update.with_password_hash(PasswordHash::new(hashed)?);
        }

        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let user = self.user_repo.update(update).await?;
        Ok(user.into())
    }
}
