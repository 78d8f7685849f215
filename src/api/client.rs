use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use super::interceptor::ErrorNormalizer;
use crate::config::{build_auth_header, ApiConfig};
use crate::models::ApiEnvelope;
use crate::session::SessionStore;

/// HTTP pipeline shared by every resource client.
///
/// Each request gets the session's bearer token (when there is one), goes
/// out once, and comes back either as the unwrapped envelope `data` or as a
/// normalized `ApiError`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    session: SessionStore,
    normalizer: ErrorNormalizer,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: SessionStore) -> Result<Self, ApiError> {
        let base_url = Url::parse(config.base_url.trim()).map_err(|e| ApiError::Client {
            message: format!("invalid base URL '{}': {}", config.base_url, e),
        })?;

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ApiError::Client {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url,
            normalizer: ErrorNormalizer::new(session.clone()),
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn normalizer(&self) -> &ErrorNormalizer {
        &self.normalizer
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET` the endpoint under `segments`, with optional query pairs.
    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        let mut builder = self.client.get(url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        self.execute(builder).await
    }

    /// `POST` a JSON body to the endpoint under `segments`.
    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        self.execute(self.client.post(url).json(body)).await
    }

    /// Base URL with `segments` appended, each percent-encoded as one path
    /// segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Client {
                message: format!("base URL '{}' cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let mut builder = builder.header(ACCEPT, "application/json");
        if let Some((name, value)) = build_auth_header(self.session.token().as_ref()) {
            builder = builder.header(&name, value);
        }

        let request = builder.build().map_err(|e| ApiError::Client {
            message: e.to_string(),
        })?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        tracing::debug!(%method, %path, "Sending request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| self.normalizer.transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            // The status alone decides the class; a body cut short only
            // loses the server's message.
            let body = match response.bytes().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(%method, %path, error = %e, "Error body unreadable");
                    Default::default()
                }
            };
            tracing::debug!(%method, %path, status = status.as_u16(), "Request failed");
            return Err(self.normalizer.status(status, &body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.normalizer.transport(&e))?;

        let envelope: ApiEnvelope<T> =
            serde_json::from_slice(&body).map_err(|e| self.normalizer.decode(&e))?;
        tracing::debug!(
            %method,
            %path,
            status = status.as_u16(),
            envelope_status = %envelope.status,
            "Request succeeded"
        );
        Ok(envelope.into_data())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::TracingNavigator;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    fn client_for(base_url: &str) -> ApiClient {
        let session =
            SessionStore::load(Arc::new(MemoryStorage::new()), Arc::new(TracingNavigator));
        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        ApiClient::new(&config, session).unwrap()
    }

    #[test]
    fn test_endpoint_appends_segments() {
        let client = client_for("http://localhost:3000/api");
        let url = client.endpoint(&["breeds", "search"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/breeds/search");
    }

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        let client = client_for("http://localhost:3000/api/");
        let url = client.endpoint(&["breeds"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/breeds");
    }

    #[test]
    fn test_endpoint_encodes_ids() {
        let client = client_for("http://localhost:3000/api");
        let url = client.endpoint(&["breeds", "a/b c"]).unwrap();
        assert_eq!(url.path(), "/api/breeds/a%2Fb%20c");
    }

    #[test]
    fn test_invalid_base_url() {
        let session =
            SessionStore::load(Arc::new(MemoryStorage::new()), Arc::new(TracingNavigator));
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(
            ApiClient::new(&config, session),
            Err(ApiError::Client { .. })
        ));
    }
}
