//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create share link request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateShareLinkBody {
    /// Photo object key to share.
    #[validate(length(min = 1, message = "photo_id is required"))]
    pub photo_id: String,
    /// Relative TTL in seconds; server default applies when absent.
    #[validate(range(min = 1, message = "ttl_seconds must be a positive integer"))]
    pub ttl_seconds: Option<i64>,
}

/// Query parameters for listing a photo's share links.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListShareLinksQuery {
    /// Photo object key.
    #[validate(length(min = 1, message = "photo_id is required"))]
    pub photo_id: String,
}

/// Renew share link request body.
///
/// Exactly one of `ttl_seconds` (relative) or `expires_at` (absolute,
/// Unix seconds) must be present; the handler enforces the
/// exactly-one rule.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RenewShareLinkBody {
    /// New TTL in seconds from now.
    #[validate(range(min = 1, message = "ttl_seconds must be a positive integer"))]
    pub ttl_seconds: Option<i64>,
    /// New absolute expiry as a Unix timestamp.
    pub expires_at: Option<i64>,
}
