//! Integration tests for lecture publishing and browsing.

mod helpers;

use http::StatusCode;
use serde_json::json;

use attend_core::types::UserId;
use helpers::TestApp;

#[tokio::test]
async fn test_banner() {
    let app = TestApp::new();
    let response = app.request("GET", "/", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "Smart Attendance Backend is running!");

    let health = app.request("GET", "/api/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");
}

#[tokio::test]
async fn test_create_lecture_returns_qr_url() {
    let app = TestApp::new();
    let teacher = app
        .register("Prof", "prof@school.edu", "pw", "teacher")
        .await;

    let response = app
        .request(
            "POST",
            "/api/v1/teacher/lectures",
            Some(json!({
                "subject": "Physics",
                "date": "2024-03-01",
                "time": "09:30",
                "teacher_id": teacher,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_str().expect("id");
    assert_eq!(response.body["name"], "Physics - 2024-03-01");
    assert_eq!(response.body["teacher_id"], teacher.as_str());
    let qr_url = response.body["qrUrl"].as_str().expect("qrUrl");
    assert!(qr_url.starts_with("https://attend.example.edu/"));
    assert!(qr_url.ends_with(&format!("?lectureId={id}")));
}

#[tokio::test]
async fn test_create_lecture_missing_fields() {
    let app = TestApp::new();
    let teacher = app
        .register("Prof", "prof@school.edu", "pw", "teacher")
        .await;

    let response = app
        .request(
            "POST",
            "/api/v1/teacher/lectures",
            Some(json!({ "subject": "", "date": "2024-03-01", "time": "09:30", "teacher_id": teacher })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_lecture_bad_teacher_id() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/v1/teacher/lectures",
            Some(json!({ "subject": "Math", "date": "2024-03-01", "time": "09:30", "teacher_id": "nope" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_teacher_lectures_newest_first() {
    let app = TestApp::new();
    let teacher = app
        .register("Prof", "prof@school.edu", "pw", "teacher")
        .await;
    let other = app
        .register("Other", "other@school.edu", "pw", "teacher")
        .await;

    let first = app.create_lecture(&teacher, "Math", "2024-03-01").await;
    let second = app.create_lecture(&teacher, "Math", "2024-03-02").await;
    app.create_lecture(&other, "Art", "2024-03-02").await;

    let response = app
        .request(
            "GET",
            &format!("/api/v1/teacher/lectures/{teacher}"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let lectures = response.body.as_array().expect("array");
    assert_eq!(lectures.len(), 2);
    assert_eq!(lectures[0]["id"], second.as_str());
    assert_eq!(lectures[1]["id"], first.as_str());
    assert!(lectures[0]["qrUrl"].as_str().is_some());
}

#[tokio::test]
async fn test_teacher_without_lectures_gets_empty_list() {
    let app = TestApp::new();
    let response = app
        .request(
            "GET",
            &format!("/api/v1/teacher/lectures/{}", UserId::new()),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_student_lecture_list_carries_teacher_name() {
    let app = TestApp::new();
    let teacher = app
        .register("Prof", "prof@school.edu", "pw", "teacher")
        .await;
    let orphan_teacher = app
        .register("Gone", "gone@school.edu", "pw", "teacher")
        .await;

    app.create_lecture(&teacher, "Math", "2024-03-01").await;
    app.create_lecture(&orphan_teacher, "History", "2024-03-02")
        .await;
    app.store
        .remove_user(orphan_teacher.parse().expect("uuid"))
        .await;

    let response = app
        .request("GET", "/api/v1/student/lectures", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let lectures = response.body.as_array().expect("array");
    assert_eq!(lectures.len(), 2);
    assert_eq!(lectures[0]["subject"], "History");
    assert_eq!(lectures[0]["teacher_name"], "Unknown Teacher");
    assert_eq!(lectures[1]["subject"], "Math");
    assert_eq!(lectures[1]["teacher_name"], "Prof");
}
