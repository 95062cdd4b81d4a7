//! S3-compatible access issuer: presigned `GetObject` URLs.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::presigning::PresigningConfig;
use chrono::{DateTime, Utc};

use pixshare_core::config::S3StorageConfig;
use pixshare_core::error::{AppError, ErrorKind};
use pixshare_core::result::AppResult;
use pixshare_core::traits::{AccessIssuer, IssuedAccess};
use pixshare_core::types::PhotoId;

/// Access issuer backed by an S3-compatible bucket.
///
/// Credentials come from the ambient AWS credential chain (env vars,
/// profile, instance role) — the application never handles key material
/// directly.
#[derive(Debug, Clone)]
pub struct S3AccessIssuer {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3AccessIssuer {
    /// Create a new S3 access issuer from configuration.
    pub async fn new(config: &S3StorageConfig) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("storage.s3.bucket is not set"));
        }

        tracing::info!(
            region = %config.region,
            bucket = %config.bucket,
            "Initializing S3 access issuer"
        );

        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared_config);
        if !config.endpoint.is_empty() {
            // Non-AWS endpoints (MinIO etc.) need path-style addressing.
            builder = builder
                .endpoint_url(config.endpoint.clone())
                .force_path_style(true);
        }

        Ok(Self {
            client: aws_sdk_s3::Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
        })
    }
}

#[async_trait]
impl AccessIssuer for S3AccessIssuer {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn issue(&self, photo_id: &PhotoId, ttl: Duration) -> AppResult<IssuedAccess> {
        let presigning = PresigningConfig::expires_in(ttl).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid presign window: {e}"),
                e,
            )
        })?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(photo_id.as_str())
            .presigned(presigning)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    "Failed to presign object URL",
                    e,
                )
            })?;

        let expires_at: DateTime<Utc> = Utc::now() + chrono::Duration::seconds(ttl.as_secs() as i64);

        Ok(IssuedAccess {
            url: request.uri().to_string(),
            expires_at,
        })
    }
}
