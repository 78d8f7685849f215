//! Client configuration: API location, storage location, secrets.

mod auth;
mod credentials;
mod loader;
mod types;

pub use auth::{build_auth_header, AuthHeader};
pub use credentials::SecureString;
pub use loader::{ConfigError, API_URL_ENV};
pub use types::{ApiConfig, Config, StorageConfig};
