//! The three-field state that drives the fact view.

use crate::error::FetchError;
use crate::models::Fact;

/// View state for the fact widget.
///
/// `loading` is true only while a request is in flight. After a request
/// settles exactly one of `fact` / `error` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Text of the last successfully fetched fact
    pub fact: Option<String>,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// User-facing message for the last failed fetch
    pub error: Option<String>,
}

impl Default for ViewState {
    /// The view mounts with its first fetch already pending.
    fn default() -> Self {
        Self {
            fact: None,
            loading: true,
            error: None,
        }
    }
}

impl ViewState {
    /// Create the initial view state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a new fetch: clears the previous fact and error immediately.
    pub fn begin_fetch(&mut self) {
        self.fact = None;
        self.error = None;
        self.loading = true;
    }

    /// Apply the outcome of a fetch.
    pub fn settle(&mut self, result: Result<Fact, FetchError>) {
        match result {
            Ok(fact) => {
                self.fact = Some(fact.fact);
                self.error = None;
            }
            Err(err) => {
                self.fact = None;
                self.error = Some(err.user_message());
            }
        }
        self.loading = false;
    }

    /// Whether the loading message is shown.
    pub fn shows_loading(&self) -> bool {
        self.loading
    }

    /// The error message to show, if any.
    pub fn visible_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The fact to show, if any. Hidden while loading.
    pub fn visible_fact(&self) -> Option<&str> {
        if self.loading {
            None
        } else {
            self.fact.as_deref()
        }
    }

    /// Whether the refresh control accepts activation.
    pub fn can_refresh(&self) -> bool {
        !self.loading
    }
}
