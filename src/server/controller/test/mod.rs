use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    router::router, service::auth::token::TokenService, state::AppState,
};
use test_utils::factory;

mod auth;

const SECRET: &str = "controller-test-secret";

fn app(db: &DatabaseConnection) -> Router {
    router(AppState::new(db.clone(), TokenService::new(SECRET, 30)))
}

/// Stores a user and issues a token for it.
async fn bearer_token(db: &DatabaseConnection) -> String {
    let user = factory::create_user(db).await.unwrap();

    TokenService::new(SECRET, 30).issue(&user.username).unwrap()
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
