//! Shared application state for request handlers.

use crate::reporter::StatusReporter;

/// Shared application state, cloneable across handlers.
///
/// Everything here is fixed before the server starts accepting requests.
#[derive(Clone)]
pub struct AppState {
    pub reporter: StatusReporter,
}

impl AppState {
    /// Creates a new application state around a started reporter.
    pub fn new(reporter: StatusReporter) -> Self {
        Self { reporter }
    }
}
