use axum::http::{header, Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::*;
use crate::server::service::auth::password::hash_password;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

async fn store_admin(db: &DatabaseConnection) {
    UserFactory::new(db)
        .username("admin")
        .password_hash(hash_password("s3cret").unwrap())
        .build()
        .await
        .unwrap();
}

/// Tests login with the right password.
///
/// Expected: 200 with a plain-text token that validates for the user
#[tokio::test]
async fn login_returns_token() {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    store_admin(db).await;

    let response = app(db)
        .oneshot(request(
            Method::POST,
            "/login",
            None,
            Some(json!({ "username": "admin", "password": "s3cret" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap().clone();
    assert!(content_type.to_str().unwrap().starts_with("text/plain"));
    let token = String::from_utf8(body_bytes(response).await).unwrap();
    let claims = TokenService::new(SECRET, 30)
        .validate_token(&token, "admin")
        .unwrap();
    assert_eq!(claims.sub, "admin");
}

/// Tests login with a wrong password.
///
/// Expected: 401
#[tokio::test]
async fn login_rejects_wrong_password() {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    store_admin(db).await;

    let response = app(db)
        .oneshot(request(
            Method::POST,
            "/login",
            None,
            Some(json!({ "username": "admin", "password": "guess" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests login without a password and with a body that is not JSON.
///
/// Expected: 400 for both
#[tokio::test]
async fn login_rejects_invalid_input() {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    store_admin(db).await;

    let response = app(db)
        .oneshot(request(
            Method::POST,
            "/login",
            None,
            Some(json!({ "username": "admin" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let malformed = Request::builder()
        .method(Method::POST)
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app(db).oneshot(malformed).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

/// Tests that the OpenAPI document lists the routes.
///
/// Expected: 200 with the login and team paths present
#[tokio::test]
async fn serves_openapi_document() {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db)
        .oneshot(request(Method::GET, "/api-docs/openapi.json", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/login"].is_object());
    assert!(body["paths"]["/teams/{id}"].is_object());
}
