use super::client::ApiClient;
use super::error::ApiError;
use crate::models::{Breed, BreedRecord};

/// Read-only queries over the breed catalog.
#[derive(Debug, Clone)]
pub struct BreedsClient {
    api: ApiClient,
}

impl BreedsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Every breed, in server order.
    pub async fn all(&self) -> Result<Vec<Breed>, ApiError> {
        let records: Vec<BreedRecord> = self.api.get(&["breeds"], &[]).await?;
        Ok(records.into_iter().map(Breed::from).collect())
    }

    /// One breed. Unknown ids come back as `ApiError::NotFound`.
    pub async fn by_id(&self, breed_id: &str) -> Result<Breed, ApiError> {
        let record: BreedRecord = self.api.get(&["breeds", breed_id], &[]).await?;
        Ok(Breed::from(record))
    }

    /// Breeds matching `query`. Matching is entirely up to the server.
    pub async fn search(&self, query: &str) -> Result<Vec<Breed>, ApiError> {
        let records: Vec<BreedRecord> = self
            .api
            .get(&["breeds", "search"], &[("q", query)])
            .await?;
        Ok(records.into_iter().map(Breed::from).collect())
    }
}
