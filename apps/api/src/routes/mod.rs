//! # Route Layer
//!
//! Axum handlers, one module per concern, plus the router wiring.
//!
//! Handlers translate between the wire (dynamic JSON, query strings) and
//! the typed core: they validate input, fetch the rows the engine needs,
//! call pure core functions, and map errors to `{ "detail": ... }`
//! responses. No business rule lives here.

pub mod health;
pub mod plants;
pub mod pricing;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

/// Builds the API router.
///
/// Exposed for tests, which drive the router in-process without a socket.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/calculate-total", post(pricing::calculate_total))
        .route("/api/validate-discount", get(pricing::validate_discount))
        .route("/api/plants", get(plants::list_plants))
        .route("/api/plants/{id}", get(plants::get_plant))
        .route("/api/categories", get(plants::list_categories))
        .route("/api/health", get(health::health))
        .with_state(state)
}
