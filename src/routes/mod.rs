//! HTTP route handlers.
//!
//! Two read-only GET endpoints, each with its own Cache-Control header.
//! Anything else, including HEAD or another method on a known path, falls
//! through to a JSON 404.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod home;
pub mod status;

use axum::{
    handler::Handler,
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_GREETING, CACHE_CONTROL_STATUS};
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Fallback for unrouted paths and unsupported methods.
pub async fn not_found() -> AppError {
    AppError::not_found()
}

/// GET-only route with a Cache-Control header on successful responses.
///
/// `get` also answers HEAD, so HEAD gets an explicit 404 endpoint. The header
/// layer is applied before the 404 endpoints are attached so they stay bare.
fn get_only<H, T>(handler: H, cache_control: &'static str) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    let route: MethodRouter<AppState> = get(handler).layer(SetResponseHeaderLayer::if_not_present(
        CACHE_CONTROL,
        HeaderValue::from_static(cache_control),
    ));

    route.head(not_found).fallback(not_found)
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Greeting - fixed content
        .route("/", get_only(home::hello, CACHE_CONTROL_GREETING))
        // Status - never cached, uptime moves on every call
        .route("/status", get_only(status::status, CACHE_CONTROL_STATUS))
        .fallback(not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
