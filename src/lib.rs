//! Client for the cat breeds catalog API.
//!
//! Browse and search breeds and their images, and keep an account session
//! (register, login, logout, profile) that survives restarts.

pub mod api;
pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod session;
pub mod storage;

pub use app::CatalogApp;
