mod admin;
mod login;
mod password;
mod password_reset;
mod profile;
mod register;
mod service;

pub use admin::{DeleteUserCommand, UpdateUserCommand};
pub use login::{LoginResult, LoginUserCommand};
pub use password_reset::{ForgotPasswordCommand, ResetPasswordCommand};
pub use profile::UpdateProfileCommand;
pub use register::RegisterUserCommand;
pub use service::{PasswordResetSettings, UserCommandService};
