//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `catfact::adapters::mock` and adds a small
//! builder for the responses the fact tests need.

pub use catfact::adapters::mock::{MockHttpClient, MockResponse};
pub use catfact::traits::{HttpError, Response};

/// Builder for a [`MockHttpClient`] with canned responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Answer `url` with `response`.
    pub fn with_response(self, url: &str, response: MockResponse) -> Self {
        self.client.set_response(url, response);
        self
    }

    /// Configures a transport failure for `url`.
    pub fn with_transport_error(self, url: &str, error: HttpError) -> Self {
        self.client.set_response(url, MockResponse::Error(error));
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
