//! Object storage configuration.

use serde::{Deserialize, Serialize};

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Access issuer backend: `"s3"` or `"noop"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// S3-compatible object storage configuration.
    #[serde(default)]
    pub s3: S3StorageConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            s3: S3StorageConfig::default(),
        }
    }
}

/// S3-compatible object storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct S3StorageConfig {
    /// S3 endpoint URL (for non-AWS services like MinIO; empty for AWS).
    #[serde(default)]
    pub endpoint: String,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Bucket holding the photo objects.
    #[serde(default)]
    pub bucket: String,
}

fn default_provider() -> String {
    "s3".to_string()
}

fn default_region() -> String {
    "ap-southeast-5".to_string()
}
