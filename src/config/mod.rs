//! Client configuration: where the backend lives and where the session is kept.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiConfig, Config, SessionConfig, DEFAULT_API_URL};
