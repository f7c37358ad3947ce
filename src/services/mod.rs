// Service exports
pub mod profiles;
pub mod sessions;

pub use profiles::{ProfileSource, SeedProfiles};
pub use sessions::{SessionError, SessionStats, SessionStore, SharedRouter};
