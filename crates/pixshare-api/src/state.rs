//! Application state shared across all handlers.

use std::sync::Arc;

use pixshare_core::config::AppConfig;
use pixshare_service::share::{ShareAccessService, ShareLinkService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Share link lifecycle service.
    pub share_service: Arc<ShareLinkService>,
    /// Capability resolution service (public read path).
    pub access_service: Arc<ShareAccessService>,
}
