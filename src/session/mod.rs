//! Authentication session.
//!
//! `SessionStore` holds the state and its durable copy; `SessionManager`
//! drives it through the account endpoints.

mod manager;
mod store;

pub use manager::SessionManager;
pub use store::{SessionSnapshot, SessionStore};
