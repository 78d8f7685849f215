//! Wire-level shapes exchanged with the catalog API.
//!
//! Every successful response is wrapped as `{"status": ..., "data": ...}`.

use serde::{Deserialize, Serialize};

use crate::config::SecureString;

/// Response wrapper used by every endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: String,
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightRecord {
    pub imperial: String,
    pub metric: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BreedRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub temperament: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub life_span: Option<String>,
    #[serde(default)]
    pub weight: Option<WeightRecord>,
    #[serde(default)]
    pub wikipedia_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatImageRecord {
    pub id: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// `data` of a login or registration response.
///
/// The token is optional on the wire; registration never carries one.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub user: UserRecord,
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of `POST /users/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecureString,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecureString::new(password.into()),
        }
    }
}

/// Body of `POST /users/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: SecureString,
}

impl RegisterRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: SecureString::new(password.into()),
        }
    }
}

/// Confirmation of a created account. The session is not signed in by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredAccount {
    pub user: crate::models::User,
}
