//! Durable client-side key/value storage.
//!
//! The session is the only writer. Multi-key writes land as a single
//! operation, so `auth_token` and `current_user` are always set or cleared
//! together.

mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage key holding the raw session token.
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key holding the JSON-serialized current user.
pub const USER_KEY: &str = "current_user";

/// Errors that can occur when touching durable storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access storage file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage file '{path}' is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode storage contents: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key/value store that survives process restarts.
pub trait Storage: Send + Sync {
    /// Read a single entry.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write all `entries` in one operation.
    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), StorageError>;

    /// Remove all `keys` in one operation. Missing keys are not an error.
    fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError>;
}
