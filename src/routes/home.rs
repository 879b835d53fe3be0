//! Greeting handler.

use axum::Json;
use serde::{Deserialize, Serialize};

/// Fixed greeting returned by `GET /`.
pub const GREETING: &str = "Hello, work";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

pub async fn hello() -> Json<Greeting> {
    Json(Greeting {
        message: GREETING.to_string(),
    })
}
