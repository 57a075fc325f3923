//! Messages sent from background tasks to the UI task.

use crate::error::FetchError;
use crate::models::Fact;

/// Messages delivered to [`App::handle_message`](super::App::handle_message).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A fetch settled
    FactFetched {
        /// Id assigned when the fetch was started
        request_id: u64,
        /// Outcome of the request
        result: Result<Fact, FetchError>,
    },
}
