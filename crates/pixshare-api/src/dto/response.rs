//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pixshare_core::types::{LinkId, PhotoId, UserId};
use pixshare_entity::ShareLink;
use pixshare_service::share::SharedPhotoAccess;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// A share link as returned to its owner.
///
/// `expires_at` goes out as Unix seconds — the format the stored
/// expiry has always had on the wire — while `created_at` stays
/// RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareLinkResponse {
    /// Capability token.
    pub link_id: LinkId,
    /// Creating user.
    pub owner_id: UserId,
    /// Shared photo key.
    pub photo_id: PhotoId,
    /// Expiry instant (Unix seconds).
    #[serde(with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

impl From<ShareLink> for ShareLinkResponse {
    fn from(link: ShareLink) -> Self {
        Self {
            link_id: link.link_id,
            owner_id: link.owner_id,
            photo_id: link.photo_id,
            expires_at: link.expires_at,
            created_at: link.created_at,
        }
    }
}

/// Collection of share links for one photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareLinkListResponse {
    /// The queried photo key.
    pub photo_id: PhotoId,
    /// All links for that photo, expired ones included.
    pub share_links: Vec<ShareLinkResponse>,
}

/// Confirmation of a revocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevokedResponse {
    /// The revoked link id.
    pub link_id: LinkId,
}

/// A granted public resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedPhotoResponse {
    /// Presigned URL for the photo.
    pub url: String,
    /// The shared photo key.
    pub photo_id: PhotoId,
    /// When the share link expires (Unix seconds).
    #[serde(with = "chrono::serde::ts_seconds")]
    pub link_expires_at: DateTime<Utc>,
    /// When the presigned URL expires (Unix seconds).
    #[serde(with = "chrono::serde::ts_seconds")]
    pub url_expires_at: DateTime<Utc>,
}

impl From<SharedPhotoAccess> for SharedPhotoResponse {
    fn from(access: SharedPhotoAccess) -> Self {
        Self {
            url: access.url,
            photo_id: access.photo_id,
            link_expires_at: access.link_expires_at,
            url_expires_at: access.url_expires_at,
        }
    }
}

/// Health probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}
