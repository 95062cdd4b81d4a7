//! Noop access issuer for tests.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use pixshare_core::result::AppResult;
use pixshare_core::traits::{AccessIssuer, IssuedAccess};
use pixshare_core::types::PhotoId;

/// Issuer that "signs" nothing: returns a deterministic URL embedding the
/// photo key and expiry. Useful for unit tests and local development
/// without an object store.
#[derive(Debug, Clone, Default)]
pub struct NoopAccessIssuer;

impl NoopAccessIssuer {
    /// Create a new noop issuer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AccessIssuer for NoopAccessIssuer {
    fn provider_type(&self) -> &str {
        "noop"
    }

    async fn issue(&self, photo_id: &PhotoId, ttl: Duration) -> AppResult<IssuedAccess> {
        let expires_at = Utc::now() + chrono::Duration::seconds(ttl.as_secs() as i64);
        Ok(IssuedAccess {
            url: format!(
                "https://noop.invalid/{}?expires={}",
                photo_id,
                expires_at.timestamp()
            ),
            expires_at,
        })
    }
}
