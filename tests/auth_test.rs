//! Authentication integration tests
//!
//! Exercises the register/login handlers directly against a live test
//! database (see tests/common).

mod common;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use common::TestDatabase;
use pixelboard::backend::auth::handlers::types::{LoginRequest, RegisterRequest};
use pixelboard::backend::auth::sessions::verify_token;
use pixelboard::backend::auth::{login, register};
use serial_test::serial;

fn register_request(username: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password: "password123".to_string(),
    }
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL test database"]
async fn test_register_issues_verifiable_token() {
    let db = TestDatabase::new().await;
    let pool = db.pool();

    let Json(response) = register(State(pool.clone()), Json(register_request("alice")))
        .await
        .unwrap();

    assert_eq!(response.user.username, "alice");
    assert_eq!(response.user.point, 0);

    let claims = verify_token(&response.token).unwrap();
    assert_eq!(claims.sub, response.user.id);
    assert_eq!(claims.email, "alice@example.com");
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL test database"]
async fn test_register_rejects_duplicates() {
    let db = TestDatabase::new().await;
    let pool = db.pool();

    register(State(pool.clone()), Json(register_request("alice")))
        .await
        .unwrap();

    let result = register(State(pool.clone()), Json(register_request("alice"))).await;
    let (status, _) = result.unwrap_err();
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL test database"]
async fn test_register_rejects_short_password() {
    let db = TestDatabase::new().await;
    let pool = db.pool();

    let mut request = register_request("alice");
    request.password = "short".to_string();

    let result = register(State(pool.clone()), Json(request)).await;
    let (status, _) = result.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL test database"]
async fn test_login_round_trip() {
    let db = TestDatabase::new().await;
    let pool = db.pool();

    register(State(pool.clone()), Json(register_request("alice")))
        .await
        .unwrap();

    let Json(response) = login(
        State(pool.clone()),
        Json(LoginRequest {
            username: "alice".to_string(),
            password: "password123".to_string(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(response.user.username, "alice");
    assert!(verify_token(&response.token).is_ok());
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL test database"]
async fn test_login_rejects_bad_credentials() {
    let db = TestDatabase::new().await;
    let pool = db.pool();

    register(State(pool.clone()), Json(register_request("alice")))
        .await
        .unwrap();

    // Wrong password and unknown user produce the same rejection
    let wrong_password = login(
        State(pool.clone()),
        Json(LoginRequest {
            username: "alice".to_string(),
            password: "wrong-password".to_string(),
        }),
    )
    .await;
    let (status, _) = wrong_password.unwrap_err();
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let unknown_user = login(
        State(pool.clone()),
        Json(LoginRequest {
            username: "nobody".to_string(),
            password: "password123".to_string(),
        }),
    )
    .await;
    let (status, _) = unknown_user.unwrap_err();
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
