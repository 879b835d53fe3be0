//! Process status endpoint.
//!
//! Reports liveness, uptime and PID from the reporter captured at startup.

use axum::{extract::State, Json};
use tracing::instrument;

use crate::reporter::StatusResponse;
use crate::state::AppState;

#[instrument(name = "status::status", skip(state))]
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let report = state.reporter.report();
    tracing::debug!(uptime_seconds = report.uptime_seconds, "Reporting status");
    Json(report)
}
