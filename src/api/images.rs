use super::client::ApiClient;
use super::error::ApiError;
use crate::models::{CatImage, CatImageRecord};

/// Image lookups for a breed.
#[derive(Debug, Clone)]
pub struct ImagesClient {
    api: ApiClient,
}

impl ImagesClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Images of `breed_id`; empty when the breed has none.
    pub async fn by_breed(&self, breed_id: &str) -> Result<Vec<CatImage>, ApiError> {
        let records: Vec<CatImageRecord> = self
            .api
            .get(&["images", "imagesbybreedid"], &[("breed_id", breed_id)])
            .await?;
        Ok(records.into_iter().map(CatImage::from).collect())
    }
}
