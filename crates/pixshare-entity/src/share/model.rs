//! Share link entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use pixshare_core::types::{LinkId, PhotoId, UserId};

/// A capability link granting time-limited access to a photo.
///
/// The link id is the entire security boundary on the public read path:
/// whoever holds it gets access until `expires_at`. Only `expires_at` is
/// ever mutated after creation, and only by the owner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ShareLink {
    /// Opaque capability token, primary identifier.
    pub link_id: LinkId,
    /// User who created the link.
    pub owner_id: UserId,
    /// Object key of the shared photo.
    pub photo_id: PhotoId,
    /// When the link stops resolving.
    pub expires_at: DateTime<Utc>,
    /// When the link was created.
    pub created_at: DateTime<Utc>,
}

impl ShareLink {
    /// Whether the link is live at `now`.
    ///
    /// Re-evaluated on every read; liveness is never cached.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Data required to persist a new share link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShareLink {
    /// Generated capability token.
    pub link_id: LinkId,
    /// Creating user.
    pub owner_id: UserId,
    /// Shared photo key.
    pub photo_id: PhotoId,
    /// Absolute expiry instant (strictly in the future).
    pub expires_at: DateTime<Utc>,
}
