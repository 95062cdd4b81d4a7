//! # pixshare-storage
//!
//! Resource access issuance: implementations of the
//! [`AccessIssuer`] trait that mint temporary read URLs for photo
//! objects. The S3 backend presigns `GetObject` requests; the noop
//! backend returns deterministic URLs for tests.
//!
//! [`AccessIssuer`]: pixshare_core::traits::AccessIssuer

pub mod noop;
pub mod s3;

use std::sync::Arc;

use pixshare_core::config::StorageConfig;
use pixshare_core::error::AppError;
use pixshare_core::result::AppResult;
use pixshare_core::traits::AccessIssuer;

pub use noop::NoopAccessIssuer;
pub use s3::S3AccessIssuer;

/// Build the configured access issuer backend.
pub async fn from_config(config: &StorageConfig) -> AppResult<Arc<dyn AccessIssuer>> {
    match config.provider.as_str() {
        "s3" => Ok(Arc::new(S3AccessIssuer::new(&config.s3).await?)),
        "noop" => Ok(Arc::new(NoopAccessIssuer::new())),
        other => Err(AppError::configuration(format!(
            "Unknown storage provider: {other}"
        ))),
    }
}
