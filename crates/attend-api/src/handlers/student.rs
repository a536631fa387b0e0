//! Student handlers: mark attendance, lecture list, history.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use attend_core::types::{LectureId, UserId};
use attend_entity::attendance::AttendanceHistoryEntry;
use attend_entity::lecture::LectureWithTeacher;

use crate::dto::request::MarkAttendanceRequest;
use crate::dto::response::MarkAttendanceResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::extractors::path::parse_id;
use crate::state::AppState;

/// POST /api/v1/student/mark-attendance
pub async fn mark_attendance(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<MarkAttendanceRequest>,
) -> Result<(StatusCode, Json<MarkAttendanceResponse>), ApiError> {
    let lecture_id: LectureId = parse_id(&req.lecture_id, "lectureId")?;
    let student_id: UserId = parse_id(&req.student_id, "studentId")?;

    let record_id = state
        .attendance_recorder
        .mark_attendance(lecture_id, student_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MarkAttendanceResponse {
            message: "Attendance marked successfully!".to_string(),
            new_record_id: record_id,
        }),
    ))
}

/// GET /api/v1/student/lectures
pub async fn list_lectures(
    State(state): State<AppState>,
) -> Result<Json<Vec<LectureWithTeacher>>, ApiError> {
    Ok(Json(state.lecture_service.list_all_for_students().await?))
}

/// GET /api/v1/student/attendance/{studentId}
pub async fn attendance_history(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<AttendanceHistoryEntry>>, ApiError> {
    let student_id: UserId = parse_id(&student_id, "studentId")?;
    Ok(Json(state.report_service.history(student_id).await?))
}
