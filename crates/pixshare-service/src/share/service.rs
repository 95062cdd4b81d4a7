//! Share link lifecycle service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{error, info, warn};

use pixshare_core::error::AppError;
use pixshare_core::result::AppResult;
use pixshare_core::types::{LinkId, PhotoId};
use pixshare_entity::{CreateShareLink, ShareLink};
use pixshare_store::{InsertOutcome, MutationOutcome, ShareLinkStore};

use super::expiry;
use super::link::LinkIdGenerator;
use crate::context::RequestContext;

/// Upper bound on link-id generation attempts when the store reports a
/// collision.
const MAX_LINK_ID_ATTEMPTS: u32 = 5;

/// Request to create a new share link.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateShareLinkRequest {
    /// Photo to share.
    pub photo_id: PhotoId,
    /// Relative TTL; defaults to [`expiry::DEFAULT_TTL_SECONDS`].
    pub ttl_seconds: Option<i64>,
}

/// New expiry for a renewal, relative or absolute.
#[derive(Debug, Clone, Copy)]
pub enum RenewExpiry {
    /// Seconds from now.
    Relative(i64),
    /// Absolute instant.
    Absolute(DateTime<Utc>),
}

/// Manages share link creation, listing, renewal, and revocation.
#[derive(Debug, Clone)]
pub struct ShareLinkService {
    /// Share link store.
    store: Arc<dyn ShareLinkStore>,
    /// Link id generator.
    generator: LinkIdGenerator,
}

impl ShareLinkService {
    /// Creates a new lifecycle service.
    pub fn new(store: Arc<dyn ShareLinkStore>) -> Self {
        Self {
            store,
            generator: LinkIdGenerator::new(),
        }
    }

    /// Creates a new share link for a photo owned by the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateShareLinkRequest,
    ) -> AppResult<ShareLink> {
        if req.photo_id.is_empty() {
            return Err(AppError::validation("photo_id must not be empty"));
        }

        let now = Utc::now();
        let expires_at = match req.ttl_seconds {
            Some(seconds) => expiry::from_relative_seconds(now, seconds)?,
            None => now + Duration::seconds(expiry::DEFAULT_TTL_SECONDS),
        };

        for attempt in 1..=MAX_LINK_ID_ATTEMPTS {
            let link = CreateShareLink {
                link_id: self.generator.generate(),
                owner_id: ctx.user_id,
                photo_id: req.photo_id.clone(),
                expires_at,
            };

            match self.store.insert(&link).await? {
                InsertOutcome::Inserted(stored) => {
                    info!(
                        owner_id = %stored.owner_id,
                        link_id = %stored.link_id,
                        photo_id = %stored.photo_id,
                        expires_at = %stored.expires_at,
                        "Share link created"
                    );
                    return Ok(stored);
                }
                InsertOutcome::AlreadyExists => {
                    warn!(attempt, "Link id collision, regenerating");
                }
            }
        }

        // Repeated collisions mean the id space is saturated or the
        // generator is biased; either way the operator must know.
        error!(
            attempts = MAX_LINK_ID_ATTEMPTS,
            "Exhausted link id generation attempts"
        );
        Err(AppError::internal("Failed to allocate a unique link id"))
    }

    /// Lists all share links for a photo, expired ones included.
    ///
    /// Owners use this view to clean up expired-but-undeleted links, so
    /// no expiry filtering happens here. An empty result is not an error.
    pub async fn list_for_photo(&self, photo_id: &PhotoId) -> AppResult<Vec<ShareLink>> {
        if photo_id.is_empty() {
            return Err(AppError::validation("photo_id must not be empty"));
        }
        self.store.list_by_photo(photo_id).await
    }

    /// Moves a link's expiry, owner only.
    ///
    /// The ownership check rides inside the store's conditional update —
    /// there is no separate read that a concurrent mutation could slip
    /// between.
    pub async fn renew(
        &self,
        ctx: &RequestContext,
        link_id: &LinkId,
        new_expiry: RenewExpiry,
    ) -> AppResult<ShareLink> {
        let now = Utc::now();
        let expires_at = match new_expiry {
            RenewExpiry::Relative(seconds) => expiry::from_relative_seconds(now, seconds)?,
            RenewExpiry::Absolute(instant) => expiry::from_absolute(now, instant)?,
        };

        match self
            .store
            .update_expiry(link_id, &ctx.user_id, expires_at)
            .await?
        {
            MutationOutcome::Applied(link) => {
                info!(
                    owner_id = %ctx.user_id,
                    link_id = %link.link_id,
                    expires_at = %link.expires_at,
                    "Share link renewed"
                );
                Ok(link)
            }
            MutationOutcome::Missing => Err(self.rejected("renew", link_id, "missing")),
            MutationOutcome::NotOwner => Err(self.rejected("renew", link_id, "not_owner")),
        }
    }

    /// Deletes a link, owner only. A second revoke of the same id reports
    /// the same not-found outcome as a link that never existed.
    pub async fn revoke(&self, ctx: &RequestContext, link_id: &LinkId) -> AppResult<()> {
        match self.store.delete(link_id, &ctx.user_id).await? {
            MutationOutcome::Applied(()) => {
                info!(owner_id = %ctx.user_id, link_id = %link_id, "Share link revoked");
                Ok(())
            }
            MutationOutcome::Missing => Err(self.rejected("revoke", link_id, "missing")),
            MutationOutcome::NotOwner => Err(self.rejected("revoke", link_id, "not_owner")),
        }
    }

    /// One external outcome for both "no such link" and "not yours".
    ///
    /// Distinct messages would let a non-owner enumerate which link ids
    /// exist. The true reason goes to the log only.
    fn rejected(&self, operation: &str, link_id: &LinkId, reason: &str) -> AppError {
        warn!(operation, link_id = %link_id, reason, "Share link mutation rejected");
        AppError::not_found("Share link not found")
    }
}
