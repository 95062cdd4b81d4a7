//! Share link lifecycle and public access handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::DateTime;
use validator::Validate;

use pixshare_core::error::AppError;
use pixshare_core::types::{LinkId, PhotoId};
use pixshare_service::share::{CreateShareLinkRequest, RenewExpiry};

use crate::dto::request::{CreateShareLinkBody, ListShareLinksQuery, RenewShareLinkBody};
use crate::dto::response::{
    ApiResponse, RevokedResponse, ShareLinkListResponse, ShareLinkResponse, SharedPhotoResponse,
};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/photos/sharing
pub async fn create_share_link(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateShareLinkBody>,
) -> Result<(StatusCode, Json<ApiResponse<ShareLinkResponse>>), AppError> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let link = state
        .share_service
        .create(
            &auth,
            CreateShareLinkRequest {
                photo_id: PhotoId::new(body.photo_id),
                ttl_seconds: body.ttl_seconds,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(ShareLinkResponse::from(link))),
    ))
}

/// GET /api/photos/sharing/links?photo_id=…
pub async fn list_share_links(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ListShareLinksQuery>,
) -> Result<Json<ApiResponse<ShareLinkListResponse>>, AppError> {
    params
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let photo_id = PhotoId::new(params.photo_id);
    let links = state.share_service.list_for_photo(&photo_id).await?;

    Ok(Json(ApiResponse::ok(ShareLinkListResponse {
        photo_id,
        share_links: links.into_iter().map(ShareLinkResponse::from).collect(),
    })))
}

/// PATCH /api/photos/sharing/{link_id}
pub async fn renew_share_link(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(link_id): Path<String>,
    Json(body): Json<RenewShareLinkBody>,
) -> Result<Json<ApiResponse<ShareLinkResponse>>, AppError> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let new_expiry = match (body.ttl_seconds, body.expires_at) {
        (Some(seconds), None) => RenewExpiry::Relative(seconds),
        (None, Some(timestamp)) => RenewExpiry::Absolute(
            DateTime::from_timestamp(timestamp, 0)
                .ok_or_else(|| AppError::validation("expires_at is not a valid timestamp"))?,
        ),
        _ => {
            return Err(AppError::validation(
                "Provide exactly one of ttl_seconds or expires_at",
            ));
        }
    };

    let link = state
        .share_service
        .renew(&auth, &LinkId::new(link_id), new_expiry)
        .await?;

    Ok(Json(ApiResponse::ok(ShareLinkResponse::from(link))))
}

/// DELETE /api/photos/sharing/{link_id}
pub async fn revoke_share_link(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(link_id): Path<String>,
) -> Result<Json<ApiResponse<RevokedResponse>>, AppError> {
    let link_id = LinkId::new(link_id);
    state.share_service.revoke(&auth, &link_id).await?;

    Ok(Json(ApiResponse::ok(RevokedResponse { link_id })))
}

/// GET /api/photos/shared/{link_id} — public capability path, no auth.
pub async fn resolve_shared_photo(
    State(state): State<AppState>,
    Path(link_id): Path<String>,
) -> Result<Json<ApiResponse<SharedPhotoResponse>>, AppError> {
    let access = state
        .access_service
        .resolve(&LinkId::new(link_id))
        .await?;

    Ok(Json(ApiResponse::ok(SharedPhotoResponse::from(access))))
}
