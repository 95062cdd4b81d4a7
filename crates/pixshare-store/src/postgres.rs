//! PostgreSQL share link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use pixshare_core::error::{AppError, ErrorKind};
use pixshare_core::result::AppResult;
use pixshare_core::types::{LinkId, PhotoId, UserId};
use pixshare_entity::{CreateShareLink, ShareLink};

use crate::store::{InsertOutcome, MutationOutcome, ShareLinkStore};

/// Share link store backed by the `share_links` table.
#[derive(Debug, Clone)]
pub struct PostgresShareLinkStore {
    pool: PgPool,
}

impl PostgresShareLinkStore {
    /// Create a new store over an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Classify a zero-row conditional mutation for telemetry.
    ///
    /// Runs after the atomic UPDATE/DELETE already declined; the answer
    /// feeds the log reason tag only, so the read-after race window here
    /// is harmless.
    async fn classify_miss<T>(&self, link_id: &LinkId) -> AppResult<MutationOutcome<T>> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM share_links WHERE link_id = $1)")
                .bind(link_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to probe share link", e)
                })?;

        Ok(if exists {
            MutationOutcome::NotOwner
        } else {
            MutationOutcome::Missing
        })
    }
}

#[async_trait]
impl ShareLinkStore for PostgresShareLinkStore {
    async fn insert(&self, link: &CreateShareLink) -> AppResult<InsertOutcome> {
        // Conditional write: two concurrent creations with the same id can
        // never silently overwrite one another.
        let row = sqlx::query_as::<_, ShareLink>(
            "INSERT INTO share_links (link_id, owner_id, photo_id, expires_at, created_at) \
             VALUES ($1, $2, $3, $4, NOW()) \
             ON CONFLICT (link_id) DO NOTHING RETURNING *",
        )
        .bind(&link.link_id)
        .bind(link.owner_id)
        .bind(&link.photo_id)
        .bind(link.expires_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert share link", e))?;

        Ok(match row {
            Some(stored) => InsertOutcome::Inserted(stored),
            None => InsertOutcome::AlreadyExists,
        })
    }

    async fn get(&self, link_id: &LinkId) -> AppResult<Option<ShareLink>> {
        sqlx::query_as::<_, ShareLink>("SELECT * FROM share_links WHERE link_id = $1")
            .bind(link_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find share link", e))
    }

    async fn list_by_photo(&self, photo_id: &PhotoId) -> AppResult<Vec<ShareLink>> {
        sqlx::query_as::<_, ShareLink>("SELECT * FROM share_links WHERE photo_id = $1")
            .bind(photo_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list share links", e)
            })
    }

    async fn update_expiry(
        &self,
        link_id: &LinkId,
        owner_id: &UserId,
        expires_at: DateTime<Utc>,
    ) -> AppResult<MutationOutcome<ShareLink>> {
        // Ownership check and mutation in one statement.
        let row = sqlx::query_as::<_, ShareLink>(
            "UPDATE share_links SET expires_at = $3 \
             WHERE link_id = $1 AND owner_id = $2 RETURNING *",
        )
        .bind(link_id)
        .bind(owner_id)
        .bind(expires_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update expiry", e))?;

        match row {
            Some(updated) => Ok(MutationOutcome::Applied(updated)),
            None => self.classify_miss(link_id).await,
        }
    }

    async fn delete(
        &self,
        link_id: &LinkId,
        owner_id: &UserId,
    ) -> AppResult<MutationOutcome<()>> {
        let result = sqlx::query("DELETE FROM share_links WHERE link_id = $1 AND owner_id = $2")
            .bind(link_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete share link", e)
            })?;

        if result.rows_affected() > 0 {
            Ok(MutationOutcome::Applied(()))
        } else {
            self.classify_miss(link_id).await
        }
    }
}
