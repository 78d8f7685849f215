//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use catbrowse::config::{ApiConfig, Config};
use catbrowse::navigation::{Navigator, Route};
use catbrowse::storage::{MemoryStorage, Storage};
use catbrowse::CatalogApp;
use parking_lot::Mutex;
use std::sync::Arc;

use mock_api::MockApi;

/// Navigator that remembers every route it was sent to.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().push(route);
    }
}

/// Config pointing at `base_url`.
pub fn config_for(base_url: &str) -> Config {
    Config {
        api: ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        },
        ..Config::default()
    }
}

/// App wired to the mock API, over the given storage.
pub fn app_with(
    mock: &MockApi,
    storage: Arc<dyn Storage>,
    navigator: Arc<RecordingNavigator>,
) -> CatalogApp {
    CatalogApp::with_storage(&config_for(&mock.base_url()), storage, navigator)
        .expect("Failed to build app")
}

/// App wired to the mock API with fresh in-memory storage.
pub fn app_for(mock: &MockApi) -> (CatalogApp, Arc<MemoryStorage>, Arc<RecordingNavigator>) {
    let storage = Arc::new(MemoryStorage::new());
    let navigator = Arc::new(RecordingNavigator::default());
    let app = app_with(mock, storage.clone(), navigator.clone());
    (app, storage, navigator)
}

/// Login response body as the API sends it.
pub fn login_payload(token: Option<&str>) -> serde_json::Value {
    let mut data = serde_json::json!({
        "user": {"id": "1", "name": "Test User", "email": "test@example.com"}
    });
    if let Some(token) = token {
        data["token"] = serde_json::Value::String(token.to_string());
    }
    data
}
