//! The Share Record Store contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use pixshare_core::result::AppResult;
use pixshare_core::types::{LinkId, PhotoId, UserId};
use pixshare_entity::{CreateShareLink, ShareLink};

/// Result of a conditional insert.
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// The record was written; returns the stored row.
    Inserted(ShareLink),
    /// A record with this link id already exists. The caller regenerates
    /// the id and retries (bounded).
    AlreadyExists,
}

/// Result of an ownership-checked mutation.
///
/// `Missing` and `NotOwner` are distinguished here so the service layer
/// can log the true reason, but they MUST collapse to one client-visible
/// outcome — reporting them differently would let a non-owner probe
/// which link ids exist.
#[derive(Debug, Clone)]
pub enum MutationOutcome<T> {
    /// The mutation was applied.
    Applied(T),
    /// No record with this link id exists.
    Missing,
    /// The record exists but belongs to a different owner; nothing was
    /// changed.
    NotOwner,
}

/// Persistence contract for share links.
///
/// Mutations are atomic conditional operations: the uniqueness check on
/// insert and the ownership check on update/delete happen inside a single
/// store operation, because the store is hit concurrently by unrelated
/// requests with no external locking. Reads are never cached — a revoked
/// link must stop resolving on the very next read.
#[async_trait]
pub trait ShareLinkStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new record iff no record with the same link id exists.
    async fn insert(&self, link: &CreateShareLink) -> AppResult<InsertOutcome>;

    /// Fetch a record by link id (exact match only).
    async fn get(&self, link_id: &LinkId) -> AppResult<Option<ShareLink>>;

    /// List all records for a photo. Ordering is unspecified; no expiry
    /// filtering. Empty vec when none exist.
    async fn list_by_photo(&self, photo_id: &PhotoId) -> AppResult<Vec<ShareLink>>;

    /// Set a new expiry iff the record exists and belongs to `owner_id`.
    async fn update_expiry(
        &self,
        link_id: &LinkId,
        owner_id: &UserId,
        expires_at: DateTime<Utc>,
    ) -> AppResult<MutationOutcome<ShareLink>>;

    /// Delete the record iff it exists and belongs to `owner_id`.
    async fn delete(
        &self,
        link_id: &LinkId,
        owner_id: &UserId,
    ) -> AppResult<MutationOutcome<()>>;
}
