//! Fact service client.
//!
//! One GET, one outcome: a [`Fact`] or a [`FetchError`]. No retries and no
//! timeout.

use std::sync::Arc;

use crate::error::{FetchError, FetchResult};
use crate::models::Fact;
use crate::traits::{Headers, HttpClient};

/// Client for the fact service, generic over the HTTP transport.
#[derive(Clone)]
pub struct FactClient {
    http: Arc<dyn HttpClient>,
    endpoint: String,
}

impl std::fmt::Debug for FactClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl FactClient {
    /// Create a client that fetches from `endpoint` using `http`.
    pub fn new(http: Arc<dyn HttpClient>, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// The URL facts are fetched from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch one random fact.
    ///
    /// Non-2xx statuses become [`FetchError::HttpStatus`] without looking at
    /// the body; transport failures become [`FetchError::Network`]; a 2xx body
    /// that is not a fact document becomes [`FetchError::Parse`].
    pub async fn fetch_fact(&self) -> FetchResult<Fact> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        tracing::debug!(url = %self.endpoint, "Fetching fact");

        let result = self.request(&headers).await;
        match &result {
            Ok(fact) => tracing::info!(length = ?fact.length, "Fact fetched"),
            Err(err) => tracing::warn!(code = err.error_code(), error = %err, "Fact fetch failed"),
        }
        result
    }

    async fn request(&self, headers: &Headers) -> FetchResult<Fact> {
        let response = self.http.get(&self.endpoint, headers).await?;

        if !response.is_success() {
            return Err(FetchError::HttpStatus {
                status: response.status,
            });
        }

        Ok(response.json::<Fact>()?)
    }
}
