//! # pixshare-api
//!
//! HTTP transport adapter for the PixShare sharing backend: Axum
//! handlers, routing, request extraction, and error mapping. Handlers
//! stay thin — all domain decisions live in `pixshare-service`.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
