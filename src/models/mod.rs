//! Domain models and wire records.
//!
//! Domain values (`User`, `Breed`, `CatImage`) are what callers see. The
//! `envelope` module holds the shapes the remote API actually sends.

pub mod envelope;

use serde::{Deserialize, Serialize};

pub use envelope::{
    ApiEnvelope, AuthPayload, BreedRecord, CatImageRecord, LoginRequest, RegisterRequest,
    RegisteredAccount, UserRecord, WeightRecord,
};

/// Account holder of the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Breed weight range in both unit systems (e.g. "7 - 10" / "3 - 5").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weight {
    pub imperial: String,
    pub metric: String,
}

/// A cat breed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    pub id: String,
    pub name: String,
    pub origin: Option<String>,
    pub temperament: Option<String>,
    pub description: Option<String>,
    pub life_span: Option<String>,
    pub weight: Option<Weight>,
    pub wikipedia_url: Option<String>,
}

/// An image of a breed, hosted by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatImage {
    pub id: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
        }
    }
}

impl From<WeightRecord> for Weight {
    fn from(record: WeightRecord) -> Self {
        Self {
            imperial: record.imperial,
            metric: record.metric,
        }
    }
}

impl From<BreedRecord> for Breed {
    fn from(record: BreedRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            origin: record.origin,
            temperament: record.temperament,
            description: record.description,
            life_span: record.life_span,
            weight: record.weight.map(Weight::from),
            wikipedia_url: record.wikipedia_url,
        }
    }
}

impl From<CatImageRecord> for CatImage {
    fn from(record: CatImageRecord) -> Self {
        Self {
            id: record.id,
            url: record.url,
            width: record.width,
            height: record.height,
        }
    }
}
