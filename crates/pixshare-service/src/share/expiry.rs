//! Expiry policy: pure functions over expiration instants.

use chrono::{DateTime, Duration, Utc};

use pixshare_core::error::AppError;
use pixshare_core::result::AppResult;

/// Default link TTL when the caller supplies none: 7 days.
///
/// The single explicit default for every call site.
pub const DEFAULT_TTL_SECONDS: i64 = 604_800;

/// Validity window of the presigned URL minted on the read path.
pub const ACCESS_WINDOW_SECONDS: u64 = 3_600;

/// Compute an expiry instant from a relative TTL.
///
/// `seconds` must be a positive integer.
pub fn from_relative_seconds(now: DateTime<Utc>, seconds: i64) -> AppResult<DateTime<Utc>> {
    if seconds <= 0 {
        return Err(AppError::validation("ttl_seconds must be a positive integer"));
    }
    Ok(now + Duration::seconds(seconds))
}

/// Validate an absolute expiry instant.
///
/// Rejects instants not strictly after `now`.
pub fn from_absolute(now: DateTime<Utc>, instant: DateTime<Utc>) -> AppResult<DateTime<Utc>> {
    if instant <= now {
        return Err(AppError::validation("expires_at must be in the future"));
    }
    Ok(instant)
}

/// Whether a link with the given expiry is live at `now`.
pub fn is_live(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now < expires_at
}
