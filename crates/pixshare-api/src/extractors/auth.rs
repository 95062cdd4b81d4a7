//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header, verifies it, and injects the caller context.
//!
//! Token *issuance* belongs to the external identity provider; this
//! extractor only verifies the signature and consumes the subject claim.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use pixshare_core::error::AppError;
use pixshare_core::types::UserId;
use pixshare_service::context::RequestContext;

use crate::state::AppState;

/// Claims PixShare consumes from the identity provider's token.
#[derive(Debug, Clone, Deserialize)]
struct Claims {
    /// Subject: the caller's user id.
    sub: String,
    /// Email, when the provider includes one.
    email: Option<String>,
}

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let mut validation = Validation::new(Algorithm::HS256);
        if state.config.auth.jwt_audience.is_empty() {
            validation.validate_aud = false;
        } else {
            validation.set_audience(&[state.config.auth.jwt_audience.as_str()]);
        }

        let data = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(state.config.auth.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| AppError::authentication(format!("Invalid bearer token: {e}")))?;

        let user_id: UserId = data
            .claims
            .sub
            .parse()
            .map_err(|_| AppError::authentication("Token subject is not a valid user id"))?;

        Ok(AuthUser(RequestContext::new(user_id, data.claims.email)))
    }
}
