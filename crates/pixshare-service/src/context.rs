//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pixshare_core::types::UserId;

/// Context for the current authenticated request.
///
/// Extracted at the transport boundary and passed into service methods so
/// that every mutation knows *who* is acting. The public read path has no
/// context — the link id itself is the capability there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID (the identity provider's subject).
    pub user_id: UserId,
    /// Username or email, when the token carries one.
    pub username: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, username: Option<String>) -> Self {
        Self {
            user_id,
            username,
            request_time: Utc::now(),
        }
    }
}
