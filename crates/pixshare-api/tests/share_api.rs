//! HTTP-level tests for the share API.
//!
//! Drives the full router against the in-memory store and the noop
//! access issuer, so every request exercises extraction, validation,
//! service logic, and error mapping end to end.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use pixshare_api::{AppState, build_router};
use pixshare_core::config::{
    AppConfig, AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig, StorageConfig,
};
use pixshare_core::types::UserId;
use pixshare_service::share::{ShareAccessService, ShareLinkService};
use pixshare_storage::NoopAccessIssuer;
use pixshare_store::{MemoryShareLinkStore, ShareLinkStore};

const TEST_SECRET: &str = "test-secret";

fn test_app() -> Router {
    let config = AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        storage: StorageConfig::default(),
        auth: AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
            jwt_audience: String::new(),
        },
        logging: LoggingConfig::default(),
    };

    let store: Arc<dyn ShareLinkStore> = Arc::new(MemoryShareLinkStore::new());
    let share_service = Arc::new(ShareLinkService::new(Arc::clone(&store)));
    let access_service = Arc::new(ShareAccessService::new(
        store,
        Arc::new(NoopAccessIssuer::new()),
    ));

    build_router(AppState {
        config: Arc::new(config),
        share_service,
        access_service,
    })
}

fn bearer_token(user_id: UserId) -> String {
    #[derive(serde::Serialize)]
    struct Claims {
        sub: String,
        email: Option<String>,
        exp: i64,
    }

    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &Claims {
            sub: user_id.to_string(),
            email: Some("owner@example.com".to_string()),
            exp: (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp(),
        },
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("encode test token")
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_health_probe() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_create_requires_auth() {
    let app = test_app();
    let (status, _) = send(
        &app,
        "POST",
        "/api/photos/sharing",
        Some(serde_json::json!({ "photo_id": "beach.jpg" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_resolve_round_trip() {
    let app = test_app();
    let token = bearer_token(UserId::new());

    let (status, body) = send(
        &app,
        "POST",
        "/api/photos/sharing",
        Some(serde_json::json!({ "photo_id": "beach.jpg", "ttl_seconds": 3600 })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let link_id = body["data"]["link_id"].as_str().unwrap().to_string();
    assert_eq!(link_id.len(), 16);
    assert!(body["data"]["expires_at"].is_i64());

    // Public resolution: no Authorization header.
    let (status, body) = send(&app, "GET", &format!("/api/photos/shared/{link_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["url"].as_str().unwrap().contains("beach.jpg"));
    assert_eq!(body["data"]["photo_id"], "beach.jpg");
}

#[tokio::test]
async fn test_create_rejects_invalid_body() {
    let app = test_app();
    let token = bearer_token(UserId::new());

    let (status, body) = send(
        &app,
        "POST",
        "/api/photos/sharing",
        Some(serde_json::json!({ "photo_id": "" })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");

    let (status, _) = send(
        &app,
        "POST",
        "/api/photos/sharing",
        Some(serde_json::json!({ "photo_id": "a.jpg", "ttl_seconds": 0 })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_returns_links_for_photo() {
    let app = test_app();
    let token = bearer_token(UserId::new());

    for _ in 0..2 {
        send(
            &app,
            "POST",
            "/api/photos/sharing",
            Some(serde_json::json!({ "photo_id": "album/cat.jpg", "ttl_seconds": 600 })),
            Some(&token),
        )
        .await;
    }

    let (status, body) = send(
        &app,
        "GET",
        "/api/photos/sharing/links?photo_id=album%2Fcat.jpg",
        None,
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let links = body["data"]["share_links"].as_array().unwrap();
    assert_eq!(links.len(), 2);
    assert!(links.iter().all(|l| l["photo_id"] == "album/cat.jpg"));
}

#[tokio::test]
async fn test_renew_moves_expiry() {
    let app = test_app();
    let token = bearer_token(UserId::new());

    let (_, body) = send(
        &app,
        "POST",
        "/api/photos/sharing",
        Some(serde_json::json!({ "photo_id": "a.jpg", "ttl_seconds": 60 })),
        Some(&token),
    )
    .await;
    let link_id = body["data"]["link_id"].as_str().unwrap().to_string();
    let old_expiry = body["data"]["expires_at"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/photos/sharing/{link_id}"),
        Some(serde_json::json!({ "ttl_seconds": 7200 })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["expires_at"].as_i64().unwrap() > old_expiry);
}

#[tokio::test]
async fn test_renew_requires_exactly_one_expiry_field() {
    let app = test_app();
    let token = bearer_token(UserId::new());

    let (_, body) = send(
        &app,
        "POST",
        "/api/photos/sharing",
        Some(serde_json::json!({ "photo_id": "a.jpg" })),
        Some(&token),
    )
    .await;
    let link_id = body["data"]["link_id"].as_str().unwrap().to_string();

    for bad_body in [
        serde_json::json!({}),
        serde_json::json!({ "ttl_seconds": 60, "expires_at": 4_000_000_000i64 }),
    ] {
        let (status, _) = send(
            &app,
            "PATCH",
            &format!("/api/photos/sharing/{link_id}"),
            Some(bad_body),
            Some(&token),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_revoke_kills_resolution() {
    let app = test_app();
    let token = bearer_token(UserId::new());

    let (_, body) = send(
        &app,
        "POST",
        "/api/photos/sharing",
        Some(serde_json::json!({ "photo_id": "a.jpg" })),
        Some(&token),
    )
    .await;
    let link_id = body["data"]["link_id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/photos/sharing/{link_id}"),
        None,
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &format!("/api/photos/shared/{link_id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Second revoke: not-found class, no crash.
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/photos/sharing/{link_id}"),
        None,
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_owner_revoke_is_indistinguishable_and_harmless() {
    let app = test_app();
    let owner_token = bearer_token(UserId::new());
    let stranger_token = bearer_token(UserId::new());

    let (_, body) = send(
        &app,
        "POST",
        "/api/photos/sharing",
        Some(serde_json::json!({ "photo_id": "a.jpg" })),
        Some(&owner_token),
    )
    .await;
    let link_id = body["data"]["link_id"].as_str().unwrap().to_string();

    let (status, stranger_body) = send(
        &app,
        "DELETE",
        &format!("/api/photos/sharing/{link_id}"),
        None,
        Some(&stranger_token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Same body a revoke of a nonexistent link would produce.
    let (_, missing_body) = send(
        &app,
        "DELETE",
        "/api/photos/sharing/ffffffffffffffff",
        None,
        Some(&stranger_token),
    )
    .await;
    assert_eq!(stranger_body, missing_body);

    // The link still resolves for anyone.
    let (status, _) = send(&app, "GET", &format!("/api/photos/shared/{link_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_resolve_unknown_link() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "GET",
        "/api/photos/shared/0000000000000000",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Invalid or expired share link");
}

#[tokio::test]
async fn test_garbage_bearer_token_is_rejected() {
    let app = test_app();
    let (status, _) = send(
        &app,
        "POST",
        "/api/photos/sharing",
        Some(serde_json::json!({ "photo_id": "a.jpg" })),
        Some("not-a-jwt"),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
