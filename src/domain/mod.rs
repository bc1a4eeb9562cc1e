pub mod casting;
pub mod errors;
pub mod film;
pub mod genre;
pub mod password_reset;
pub mod policy;
pub mod relation;
pub mod review;
pub mod user;
