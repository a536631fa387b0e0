//! Integration tests for registration and portal login.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_register_and_login() {
    let app = TestApp::new();
    let id = app
        .register("Ada", "ada@school.edu", "pw-123", "student")
        .await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/student/login",
            Some(json!({ "email": "ada@school.edu", "password": "pw-123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].as_str().is_some());
    assert_eq!(response.body["user"]["id"], id.as_str());
    assert_eq!(response.body["user"]["role"], "student");
    assert_eq!(response.body["user"]["name"], "Ada");
}

#[tokio::test]
async fn test_register_without_id_generates_one() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(json!({
                "name": "Bo", "email": "bo@school.edu", "password": "pw", "role": "teacher"
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "User registered successfully!");

    let token = app.login("teacher", "bo@school.edu", "pw").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(json!({ "email": "x@school.edu", "password": "pw" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_register_unknown_role() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(json!({
                "name": "Eve", "email": "eve@school.edu", "password": "pw", "role": "admin"
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_role_is_case_sensitive() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(json!({
                "name": "Eve", "email": "eve@school.edu", "password": "pw", "role": "Teacher"
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    app.register("Ada", "ada@school.edu", "pw", "student").await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(json!({
                "name": "Ada 2", "email": "ada@school.edu", "password": "pw", "role": "teacher"
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "Email or ID already exists.");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    app.register("Ada", "ada@school.edu", "pw", "student").await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/student/login",
            Some(json!({ "email": "ada@school.edu", "password": "nope" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid credentials.");
}

#[tokio::test]
async fn test_login_unknown_email_looks_like_wrong_password() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/v1/auth/teacher/login",
            Some(json!({ "email": "ghost@school.edu", "password": "pw" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid credentials.");
}

#[tokio::test]
async fn test_wrong_portal_even_with_wrong_password() {
    let app = TestApp::new();
    app.register("Prof", "prof@school.edu", "pw", "teacher")
        .await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/student/login",
            Some(json!({ "email": "prof@school.edu", "password": "not-the-password" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body["message"],
        "Access denied. Please use the 'teacher' login portal."
    );
    assert_eq!(response.body["details"]["role"], "teacher");
}

#[tokio::test]
async fn test_me_with_token() {
    let app = TestApp::new();
    let id = app.register("Ada", "ada@school.edu", "pw", "student").await;
    let token = app.login("student", "ada@school.edu", "pw").await;

    let response = app
        .request("GET", "/api/v1/auth/me", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id.as_str());
    assert_eq!(response.body["role"], "student");
}

#[tokio::test]
async fn test_me_rejects_missing_and_tampered_tokens() {
    let app = TestApp::new();
    app.register("Ada", "ada@school.edu", "pw", "student").await;
    let token = app.login("student", "ada@school.edu", "pw").await;

    let missing = app.request("GET", "/api/v1/auth/me", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let tampered = format!("{token}x");
    let response = app
        .request("GET", "/api/v1/auth/me", None, Some(&tampered))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_store_outage_is_opaque_500() {
    let app = TestApp::new();
    app.store.set_offline(true).await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/teacher/login",
            Some(json!({ "email": "a@school.edu", "password": "pw" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["message"], "Internal server error");
}
