use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{DisplayName, Email, NewUser, PasswordHash, Role, User},
};

pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Self-service sign-up. The very first account becomes ADMIN, every later one USER.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let name = DisplayName::new(command.name)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        let existing = self.user_repo.count().await?;
        let role = if existing == 0 { Role::Admin } else { Role::User };

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email is already registered"));
        }

        let user = self
            .create_and_insert_user(name, email, &command.password, role)
            .await?;
        tracing::info!(user_id = %user.id, role = %user.role, "user registered");

        Ok(user.into())
    }

    async fn create_and_insert_user(
        &self,
        name: DisplayName,
        email: Email,
        password: &str,
        role: Role,
    ) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let created_at = self.clock.now();
        let new_user = NewUser::new(name, email, password_hash, role, created_at);
        let user = self.user_repo.insert(new_user).await?;

        Ok(user)
    }
}
