//! Route definitions for the PixShare HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(share_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Share lifecycle (authenticated) and public capability access.
fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/photos/sharing", post(handlers::share::create_share_link))
        .route(
            "/photos/sharing/links",
            get(handlers::share::list_share_links),
        )
        .route(
            "/photos/sharing/{link_id}",
            patch(handlers::share::renew_share_link),
        )
        .route(
            "/photos/sharing/{link_id}",
            delete(handlers::share::revoke_share_link),
        )
        .route(
            "/photos/shared/{link_id}",
            get(handlers::share::resolve_shared_photo),
        )
}

/// Liveness probe.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
