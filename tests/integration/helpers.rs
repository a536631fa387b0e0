//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use attend_api::{Stores, build_app};
use attend_core::config::AppConfig;
use attend_database::MemoryStore;

const TEST_CONFIG: &str = r#"
[auth]
jwt_secret = "integration-test-secret"
token_ttl_minutes = 60
password_memory_kib = 1024
password_iterations = 1

[frontend]
base_url = "https://attend.example.edu"

[reports]
defaulter_threshold_percent = 75.0
"#;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store, for seeding and fault injection
    pub store: MemoryStore,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let config = AppConfig::from_toml_str(TEST_CONFIG, |_| None)
            .expect("Failed to parse test config");
        let store = MemoryStore::new();
        let router = build_app(config.clone(), Stores::memory(store.clone()))
            .expect("Failed to build app");
        Self {
            router,
            store,
            config,
        }
    }

    /// Register a user through the API and return its id
    pub async fn register(&self, name: &str, email: &str, password: &str, role: &str) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let response = self
            .request(
                "POST",
                "/api/v1/auth/register",
                Some(json!({
                    "id": id,
                    "name": name,
                    "email": email,
                    "password": password,
                    "role": role,
                    "roll_number": format!("R-{name}"),
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        id
    }

    /// Log in through a portal and return the token
    pub async fn login(&self, portal: &str, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                &format!("/api/v1/auth/{portal}/login"),
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["token"]
            .as_str()
            .expect("token missing")
            .to_string()
    }

    /// Create a lecture and return its id
    pub async fn create_lecture(&self, teacher_id: &str, subject: &str, date: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/teacher/lectures",
                Some(json!({
                    "subject": subject,
                    "date": date,
                    "time": "10:00",
                    "teacher_id": teacher_id,
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["id"]
            .as_str()
            .expect("lecture id missing")
            .to_string()
    }

    /// Mark attendance and return the raw response
    pub async fn mark(&self, lecture_id: &str, student_id: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/v1/student/mark-attendance",
            Some(json!({ "lectureId": lecture_id, "studentId": student_id })),
            None,
        )
        .await
    }

    /// Send a request through the router
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when not JSON)
    pub body: Value,
    /// Raw body text
    pub text: String,
}
