//! Hello Work API
//!
//! A small HTTP service with a greeting endpoint and a process status report
//! (liveness, uptime and PID).

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod reporter;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use reporter::{StatusReporter, StatusResponse};
pub use routes::create_router;
pub use state::AppState;
