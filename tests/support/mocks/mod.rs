// tests/support/mocks/mod.rs
pub mod adapters;
pub mod memory;
pub mod security;
pub mod time;

pub use adapters::{CapturingMailer, MemoryStorage};
pub use memory::MemoryDb;
pub use security::{FakeTokenManager, PlainPasswordHasher, actor, bearer, token_for};
pub use time::{ManualClock, fixed_now};
