//! Process status reporting.
//!
//! A `StatusReporter` captures the process start time and PID once at startup
//! and is handed to request handlers through `AppState`. Uptime is measured
//! against a monotonic clock so it never goes backwards.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value of `status` while the process can answer requests.
pub const STATUS_OK: &str = "ok";

/// Body of `GET /status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub uptime_seconds: f64,
    pub pid: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct StatusReporter {
    started: Instant,
    started_at: DateTime<Utc>,
    pid: u32,
}

impl StatusReporter {
    /// Capture the start time and PID of the current process.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            started_at: Utc::now(),
            pid: std::process::id(),
        }
    }

    /// Build a reporter around an already captured start instant.
    pub fn with_start(started: Instant, pid: u32) -> Self {
        let elapsed = chrono::Duration::from_std(started.elapsed())
            .unwrap_or_else(|_| chrono::Duration::zero());
        let started_at = Utc::now() - elapsed;
        Self {
            started,
            started_at,
            pid,
        }
    }

    /// Wall-clock time the reporter considers the process start.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn uptime_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    pub fn report(&self) -> StatusResponse {
        StatusResponse {
            status: STATUS_OK.to_string(),
            uptime_seconds: self.uptime_seconds(),
            pid: self.pid,
        }
    }
}
