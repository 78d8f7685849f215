//! Wiring: one session store shared by every client.

use std::sync::Arc;

use crate::api::{ApiClient, ApiError, BreedsClient, ImagesClient};
use crate::config::Config;
use crate::navigation::Navigator;
use crate::session::{SessionManager, SessionStore};
use crate::storage::{FileStorage, Storage};

/// Everything a front end needs, built around a single `SessionStore`.
#[derive(Debug, Clone)]
pub struct CatalogApp {
    pub session: SessionManager,
    pub breeds: BreedsClient,
    pub images: ImagesClient,
}

impl CatalogApp {
    /// Build against the configured session file.
    pub fn from_config(config: &Config, navigator: Arc<dyn Navigator>) -> Result<Self, ApiError> {
        let storage = Arc::new(FileStorage::new(config.storage.resolved_path()));
        Self::with_storage(config, storage, navigator)
    }

    /// Build against an explicit storage backend.
    pub fn with_storage(
        config: &Config,
        storage: Arc<dyn Storage>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let store = SessionStore::load(storage, navigator);
        let api = ApiClient::new(&config.api, store)?;

        Ok(Self {
            session: SessionManager::new(api.clone()),
            breeds: BreedsClient::new(api.clone()),
            images: ImagesClient::new(api),
        })
    }
}
