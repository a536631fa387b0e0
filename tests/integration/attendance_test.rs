//! Integration tests for check-in, rosters and reports.

mod helpers;

use http::StatusCode;
use serde_json::json;

use attend_core::types::LectureId;
use helpers::TestApp;

#[tokio::test]
async fn test_mark_attendance_once() {
    let app = TestApp::new();
    let teacher = app
        .register("Prof", "prof@school.edu", "pw", "teacher")
        .await;
    let student = app
        .register("Ada", "ada@school.edu", "pw", "student")
        .await;
    let lecture = app.create_lecture(&teacher, "Math", "2024-03-01").await;

    let first = app.mark(&lecture, &student).await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.body["message"], "Attendance marked successfully!");
    assert!(first.body["newRecordId"].as_str().is_some());

    let second = app.mark(&lecture, &student).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(
        second.body["message"],
        "Attendance already marked for this lecture."
    );
}

#[tokio::test]
async fn test_mark_attendance_rejects_bad_ids() {
    let app = TestApp::new();

    let missing = app
        .request(
            "POST",
            "/api/v1/student/mark-attendance",
            Some(json!({ "lectureId": "" })),
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    let malformed = app.mark("not-a-uuid", "also-not").await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mark_attendance_unknown_lecture_is_server_error() {
    let app = TestApp::new();
    let student = app
        .register("Ada", "ada@school.edu", "pw", "student")
        .await;

    let response = app.mark(&LectureId::new().to_string(), &student).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["message"], "Internal server error");
}

#[tokio::test]
async fn test_live_roster_and_report_in_arrival_order() {
    let app = TestApp::new();
    let teacher = app
        .register("Prof", "prof@school.edu", "pw", "teacher")
        .await;
    let zed = app.register("Zed", "zed@school.edu", "pw", "student").await;
    let ada = app.register("Ada", "ada@school.edu", "pw", "student").await;
    let lecture = app.create_lecture(&teacher, "Math", "2024-03-01").await;

    app.mark(&lecture, &zed).await;
    app.mark(&lecture, &ada).await;

    let live = app
        .request(
            "GET",
            &format!("/api/v1/teacher/lectures/{lecture}/attendance"),
            None,
            None,
        )
        .await;
    assert_eq!(live.status, StatusCode::OK);
    let rows = live.body.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["student_name"], "Zed");
    assert_eq!(rows[1]["student_name"], "Ada");

    let report = app
        .request(
            "GET",
            &format!("/api/v1/teacher/lecture-report/{lecture}"),
            None,
            None,
        )
        .await;
    assert_eq!(report.status, StatusCode::OK);
    let rows = report.body.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["student_id"], zed.as_str());
    assert_eq!(rows[0]["roll_number"], "R-Zed");
    assert_eq!(rows[1]["student_name"], "Ada");
}

#[tokio::test]
async fn test_live_roster_unknown_student() {
    let app = TestApp::new();
    let teacher = app
        .register("Prof", "prof@school.edu", "pw", "teacher")
        .await;
    let ada = app.register("Ada", "ada@school.edu", "pw", "student").await;
    let lecture = app.create_lecture(&teacher, "Math", "2024-03-01").await;
    app.mark(&lecture, &ada).await;

    app.store.remove_user(ada.parse().expect("uuid")).await;

    let live = app
        .request(
            "GET",
            &format!("/api/v1/teacher/lectures/{lecture}/attendance"),
            None,
            None,
        )
        .await;
    assert_eq!(live.status, StatusCode::OK);
    assert_eq!(live.body[0]["student_name"], "Unknown");
}

#[tokio::test]
async fn test_student_history_newest_first() {
    let app = TestApp::new();
    let teacher = app
        .register("Prof", "prof@school.edu", "pw", "teacher")
        .await;
    let ada = app.register("Ada", "ada@school.edu", "pw", "student").await;
    let math = app.create_lecture(&teacher, "Math", "2024-03-01").await;
    let art = app.create_lecture(&teacher, "Art", "2024-03-02").await;

    app.mark(&math, &ada).await;
    app.mark(&art, &ada).await;

    let response = app
        .request(
            "GET",
            &format!("/api/v1/student/attendance/{ada}"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let rows = response.body.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["lecture_id"], art.as_str());
    assert_eq!(rows[0]["lecture_subject"], "Art");
    assert_eq!(rows[0]["status"], "present");
    assert_eq!(rows[1]["lecture_name"], "Math - 2024-03-01");
}

#[tokio::test]
async fn test_defaulters_below_threshold() {
    let app = TestApp::new();
    let teacher = app
        .register("Prof", "prof@school.edu", "pw", "teacher")
        .await;
    let ada = app.register("Ada", "ada@school.edu", "pw", "student").await;
    let bo = app.register("Bo", "bo@school.edu", "pw", "student").await;
    let cy = app.register("Cy", "cy@school.edu", "pw", "student").await;

    let mut lectures = Vec::new();
    for day in 1..=4 {
        lectures.push(
            app.create_lecture(&teacher, "Math", &format!("2024-03-0{day}"))
                .await,
        );
    }

    // Ada 4/4, Bo 3/4 (exactly at threshold), Cy 1/4
    for lecture in &lectures {
        app.mark(lecture, &ada).await;
    }
    for lecture in &lectures[..3] {
        app.mark(lecture, &bo).await;
    }
    app.mark(&lectures[0], &cy).await;

    let response = app
        .request(
            "GET",
            &format!("/api/v1/teacher/reports/defaulters/{teacher}"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let rows = response.body.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["student_id"], cy.as_str());
    assert_eq!(rows[0]["attended"], 1);
    assert_eq!(rows[0]["total_lectures"], 4);
    assert_eq!(rows[0]["percentage_present"], 25.0);
}

#[tokio::test]
async fn test_defaulters_empty_without_lectures() {
    let app = TestApp::new();
    let teacher = app
        .register("Prof", "prof@school.edu", "pw", "teacher")
        .await;
    app.register("Ada", "ada@school.edu", "pw", "student").await;

    let response = app
        .request(
            "GET",
            &format!("/api/v1/teacher/reports/defaulters/{teacher}"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}
