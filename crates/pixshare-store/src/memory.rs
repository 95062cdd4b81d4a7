//! In-memory share link store.
//!
//! Used by unit tests and single-node development. The whole map sits
//! behind one mutex, which gives the same atomicity the Postgres store
//! gets from single-statement conditional writes.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use pixshare_core::result::AppResult;
use pixshare_core::types::{LinkId, PhotoId, UserId};
use pixshare_entity::{CreateShareLink, ShareLink};

use crate::store::{InsertOutcome, MutationOutcome, ShareLinkStore};

/// Share link store over a mutex-guarded map.
#[derive(Debug, Default)]
pub struct MemoryShareLinkStore {
    links: Mutex<HashMap<LinkId, ShareLink>>,
}

impl MemoryShareLinkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShareLinkStore for MemoryShareLinkStore {
    async fn insert(&self, link: &CreateShareLink) -> AppResult<InsertOutcome> {
        let mut links = self.links.lock().expect("share link map poisoned");

        if links.contains_key(&link.link_id) {
            return Ok(InsertOutcome::AlreadyExists);
        }

        let stored = ShareLink {
            link_id: link.link_id.clone(),
            owner_id: link.owner_id,
            photo_id: link.photo_id.clone(),
            expires_at: link.expires_at,
            created_at: Utc::now(),
        };
        links.insert(stored.link_id.clone(), stored.clone());
        Ok(InsertOutcome::Inserted(stored))
    }

    async fn get(&self, link_id: &LinkId) -> AppResult<Option<ShareLink>> {
        let links = self.links.lock().expect("share link map poisoned");
        Ok(links.get(link_id).cloned())
    }

    async fn list_by_photo(&self, photo_id: &PhotoId) -> AppResult<Vec<ShareLink>> {
        let links = self.links.lock().expect("share link map poisoned");
        Ok(links
            .values()
            .filter(|l| &l.photo_id == photo_id)
            .cloned()
            .collect())
    }

    async fn update_expiry(
        &self,
        link_id: &LinkId,
        owner_id: &UserId,
        expires_at: DateTime<Utc>,
    ) -> AppResult<MutationOutcome<ShareLink>> {
        let mut links = self.links.lock().expect("share link map poisoned");

        match links.get_mut(link_id) {
            None => Ok(MutationOutcome::Missing),
            Some(link) if &link.owner_id != owner_id => Ok(MutationOutcome::NotOwner),
            Some(link) => {
                link.expires_at = expires_at;
                Ok(MutationOutcome::Applied(link.clone()))
            }
        }
    }

    async fn delete(
        &self,
        link_id: &LinkId,
        owner_id: &UserId,
    ) -> AppResult<MutationOutcome<()>> {
        let mut links = self.links.lock().expect("share link map poisoned");

        match links.get(link_id) {
            None => Ok(MutationOutcome::Missing),
            Some(link) if &link.owner_id != owner_id => Ok(MutationOutcome::NotOwner),
            Some(_) => {
                links.remove(link_id);
                Ok(MutationOutcome::Applied(()))
            }
        }
    }
}
