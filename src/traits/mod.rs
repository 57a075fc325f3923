//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET against the fact service

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
