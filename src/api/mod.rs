//! Catalog API access.
//!
//! `ApiClient` owns the HTTP pipeline; `BreedsClient` and `ImagesClient`
//! map its envelopes into domain models. All failures surface as
//! `ApiError`, already normalized by `ErrorNormalizer`.

pub mod breeds;
pub mod client;
pub mod error;
pub mod images;
pub mod interceptor;

pub use breeds::BreedsClient;
pub use client::ApiClient;
pub use error::ApiError;
pub use images::ImagesClient;
pub use interceptor::{classify_status, ErrorNormalizer};
