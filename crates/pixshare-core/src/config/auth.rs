//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Bearer-token verification configuration.
///
/// PixShare does not issue tokens; it only verifies tokens minted by the
/// external identity provider and consumes the subject claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for JWT verification (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Expected `aud` claim; empty disables audience validation.
    #[serde(default)]
    pub jwt_audience: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_audience: String::new(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}
