//! Error types.
//!
//! Fetch failures are the only domain errors. They are never fatal: the view
//! shows them and the user can refresh. Process-level setup failures
//! (terminal, runtime, log file) use `color_eyre::Result` instead.

mod fetch;

pub use fetch::FetchError;

/// Result alias for fact fetching.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
