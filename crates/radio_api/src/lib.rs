//! piradio web API
//!
//! This library provides the HTTP control surface for the external radio
//! tuner executable.

mod tuner;

use axum::{Router, routing::get};
use radio_core::RadioControl;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Create the application router with all endpoints
///
/// The tuner endpoint is mounted both at `/tune` and at the root, so the
/// server can stand in directly for the original single-script deployment.
pub fn create_app(radio: Arc<dyn RadioControl>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(tuner::tune))
        .route("/tune", get(tuner::tune))
        .layer(TraceLayer::new_for_http())
        .with_state(radio)
}
