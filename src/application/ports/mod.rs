// src/application/ports/mod.rs
pub mod mail;
pub mod security;
pub mod storage;
pub mod time;
pub mod util;

pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type TokenManagerPort = dyn security::TokenManager;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
pub type MailerPort = dyn mail::Mailer;
pub type MediaStoragePort = dyn storage::MediaStorage;
