//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{mock_client, FACT_BODY};
//!
//! let (client, mock) = mock_client(MockResponse::json(200, FACT_BODY));
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use catfact::adapters::ReqwestHttpClient;
use catfact::app::App;
use catfact::fetcher::FactClient;
use ratatui::buffer::Buffer;

/// URL the mock client answers on.
pub const TEST_URL: &str = "https://catfact.test/fact";

/// A body in the exact shape the fact service returns.
pub const FACT_BODY: &str = r#"{"fact":"Cats have 32 muscles in each ear.","length":33}"#;

/// The fact text inside [`FACT_BODY`].
pub const FACT_TEXT: &str = "Cats have 32 muscles in each ear.";

/// Build a [`FactClient`] over a mock transport answering `response` at [`TEST_URL`].
pub fn mock_client(response: MockResponse) -> (FactClient, MockHttpClient) {
    let mock = MockHttpConfig::new()
        .with_response(TEST_URL, response)
        .build();
    let client = FactClient::new(Arc::new(mock.clone()), TEST_URL);
    (client, mock)
}

/// Build a [`FactClient`] that talks HTTP to `url` (usually a wiremock server).
pub fn http_client(url: impl Into<String>) -> FactClient {
    FactClient::new(Arc::new(ReqwestHttpClient::new()), url)
}

/// Wait for the next fetch result and apply it. Panics after two seconds.
pub async fn settle_next(app: &mut App) -> u64 {
    let rx = app.message_rx.as_mut().expect("receiver already taken");
    let msg = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for fetch")
        .expect("channel closed");
    let id = match &msg {
        catfact::app::AppMessage::FactFetched { request_id, .. } => *request_id,
    };
    app.handle_message(msg);
    id
}

/// Flatten a buffer into one string per row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Whether any row of `buffer` contains `needle`.
pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    buffer_lines(buffer).iter().any(|line| line.contains(needle))
}
