//! Access issuer trait for minting temporary resource URLs.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::result::AppResult;
use crate::types::PhotoId;

/// A temporary, scoped access credential for a single photo object.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedAccess {
    /// Presigned URL granting read access to the object.
    pub url: String,
    /// When the URL stops working.
    pub expires_at: DateTime<Utc>,
}

/// Trait for object-store backends that can mint temporary read URLs.
///
/// The [`AccessIssuer`] trait is defined here in `pixshare-core` and
/// implemented in `pixshare-storage` (S3 presigning, plus a noop backend
/// for tests). The issuer never sees share-link state; it only signs a
/// URL for an object key with a bounded validity window.
#[async_trait]
pub trait AccessIssuer: Send + Sync + std::fmt::Debug + 'static {
    /// Return the issuer backend name (e.g., "s3", "noop").
    fn provider_type(&self) -> &str;

    /// Mint a temporary read URL for the given photo, valid for `ttl`.
    async fn issue(&self, photo_id: &PhotoId, ttl: Duration) -> AppResult<IssuedAccess>;
}
