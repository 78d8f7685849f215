//! Kept in its own binary: these tests set `CATBROWSE_API_URL`, which every
//! `Config::load_from` call reads.

use catbrowse::config::{Config, API_URL_ENV};
use std::env;
use tempfile::TempDir;

#[test]
fn test_api_url_env_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[api]\nbase_url = \"https://file.example.com/api\"\n").unwrap();

    env::set_var(API_URL_ENV, "http://127.0.0.1:4000/api");
    let overridden = Config::load_from(&path);

    env::set_var(API_URL_ENV, "   ");
    let blank = Config::load_from(&path);

    env::set_var(API_URL_ENV, "localhost:4000");
    let invalid = Config::load_from(&path);

    env::remove_var(API_URL_ENV);

    assert_eq!(overridden.unwrap().api.base_url, "http://127.0.0.1:4000/api");
    assert_eq!(blank.unwrap().api.base_url, "https://file.example.com/api");
    assert!(invalid.is_err());
}
