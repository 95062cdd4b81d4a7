//! Capability resolution — exchanges a link id for a temporary photo URL.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{error, warn};

use pixshare_core::error::AppError;
use pixshare_core::result::AppResult;
use pixshare_core::traits::AccessIssuer;
use pixshare_core::types::{LinkId, PhotoId};
use pixshare_store::ShareLinkStore;

use super::expiry;

/// A granted resolution: temporary URL plus the bounds it lives under.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SharedPhotoAccess {
    /// Presigned URL for the photo object.
    pub url: String,
    /// The shared photo key.
    pub photo_id: PhotoId,
    /// When the share link itself expires.
    pub link_expires_at: DateTime<Utc>,
    /// When the presigned URL expires (typically much sooner).
    pub url_expires_at: DateTime<Utc>,
}

/// Resolves share links on the public read path.
///
/// No caller authentication happens here: possession of the link id IS
/// the capability, and its unguessability is the entire security
/// boundary. Lookup is exact-match on the primary key; nothing in this
/// path may weaken that (no prefix or partial matching).
#[derive(Debug, Clone)]
pub struct ShareAccessService {
    /// Share link store.
    store: Arc<dyn ShareLinkStore>,
    /// Temporary URL issuer.
    issuer: Arc<dyn AccessIssuer>,
}

impl ShareAccessService {
    /// Creates a new access service.
    pub fn new(store: Arc<dyn ShareLinkStore>, issuer: Arc<dyn AccessIssuer>) -> Self {
        Self { store, issuer }
    }

    /// Validates a link id and mints a temporary URL for its photo.
    ///
    /// Liveness is re-evaluated on every call; nothing is cached, so a
    /// revoked link dies on the very next resolution.
    pub async fn resolve(&self, link_id: &LinkId) -> AppResult<SharedPhotoAccess> {
        let link = self
            .store
            .get(link_id)
            .await?
            .ok_or_else(|| Self::rejected(link_id, "not_found"))?;

        if !expiry::is_live(link.expires_at, Utc::now()) {
            return Err(Self::rejected(link_id, "expired"));
        }

        let access = self
            .issuer
            .issue(
                &link.photo_id,
                Duration::from_secs(expiry::ACCESS_WINDOW_SECONDS),
            )
            .await
            .map_err(|e| {
                error!(link_id = %link_id, error = %e, "Access issuance failed");
                e
            })?;

        Ok(SharedPhotoAccess {
            url: access.url,
            photo_id: link.photo_id,
            link_expires_at: link.expires_at,
            url_expires_at: access.expires_at,
        })
    }

    /// One external outcome for absent and expired links.
    ///
    /// Reporting them differently would leak when a link expired; the
    /// reason tag exists for telemetry only.
    fn rejected(link_id: &LinkId, reason: &str) -> AppError {
        warn!(link_id = %link_id, reason, "Share link resolution rejected");
        AppError::not_found("Invalid or expired share link")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Duration as ChronoDuration;
    use pixshare_core::error::ErrorKind;
    use pixshare_core::types::UserId;
    use pixshare_entity::CreateShareLink;
    use pixshare_storage::NoopAccessIssuer;
    use pixshare_store::MemoryShareLinkStore;

    fn services() -> (ShareAccessService, Arc<MemoryShareLinkStore>) {
        let store = Arc::new(MemoryShareLinkStore::new());
        let issuer = Arc::new(NoopAccessIssuer::new());
        (ShareAccessService::new(store.clone(), issuer), store)
    }

    async fn seed(
        store: &MemoryShareLinkStore,
        link_id: &str,
        photo_id: &str,
        ttl_seconds: i64,
    ) -> LinkId {
        store
            .insert(&CreateShareLink {
                link_id: LinkId::new(link_id),
                owner_id: UserId::new(),
                photo_id: PhotoId::new(photo_id),
                expires_at: Utc::now() + ChronoDuration::seconds(ttl_seconds),
            })
            .await
            .unwrap();
        LinkId::new(link_id)
    }

    #[tokio::test]
    async fn test_live_link_grants_url_bound_to_photo() {
        let (service, store) = services();
        let link_id = seed(&store, "abcd1234abcd1234", "beach.jpg", 3600).await;

        let access = service.resolve(&link_id).await.unwrap();

        assert!(access.url.contains("beach.jpg"));
        assert_eq!(access.photo_id, PhotoId::new("beach.jpg"));
        assert!(access.url_expires_at > Utc::now());
    }

    #[tokio::test]
    async fn test_unknown_link_is_rejected() {
        let (service, _store) = services();
        let err = service.resolve(&LinkId::new("0000000000000000")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_expired_link_is_rejected_like_unknown() {
        let (service, store) = services();
        let link_id = seed(&store, "abcd1234abcd1234", "beach.jpg", -10).await;

        let expired = service.resolve(&link_id).await.unwrap_err();
        let unknown = service
            .resolve(&LinkId::new("ffffffffffffffff"))
            .await
            .unwrap_err();

        // Same class, same message: expiry timing must not leak.
        assert_eq!(expired.kind, ErrorKind::NotFound);
        assert_eq!(expired.message, unknown.message);
    }

    #[tokio::test]
    async fn test_revoked_link_dies_on_next_read() {
        let (service, store) = services();
        let owner = UserId::new();
        store
            .insert(&CreateShareLink {
                link_id: LinkId::new("1234123412341234"),
                owner_id: owner,
                photo_id: PhotoId::new("a.jpg"),
                expires_at: Utc::now() + ChronoDuration::seconds(3600),
            })
            .await
            .unwrap();
        let link_id = LinkId::new("1234123412341234");

        assert!(service.resolve(&link_id).await.is_ok());
        store.delete(&link_id, &owner).await.unwrap();
        assert!(service.resolve(&link_id).await.is_err());
    }

    #[tokio::test]
    async fn test_partial_ids_never_match() {
        let (service, store) = services();
        seed(&store, "abcd1234abcd1234", "beach.jpg", 3600).await;

        // Prefix, truncation, and case variants all miss.
        for candidate in ["abcd1234", "abcd1234abcd123", "ABCD1234ABCD1234"] {
            let err = service.resolve(&LinkId::new(candidate)).await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::NotFound);
        }
    }
}
