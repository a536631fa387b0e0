//! Teacher handlers: lectures, live roster, lecture report, defaulters.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use attend_core::types::{LectureId, UserId};
use attend_entity::attendance::{Defaulter, LectureReportEntry, LiveAttendanceEntry};
use attend_service::PublishedLecture;

use crate::dto::request::CreateLectureRequest;
use crate::dto::response::CreatedLectureResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::extractors::path::parse_id;
use crate::state::AppState;

/// POST /api/v1/teacher/lectures
pub async fn create_lecture(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateLectureRequest>,
) -> Result<(StatusCode, Json<CreatedLectureResponse>), ApiError> {
    let teacher_id: UserId = parse_id(&req.teacher_id, "teacher_id")?;
    let lecture = state
        .lecture_service
        .create(req.subject, req.date, req.time, teacher_id)
        .await?;
    Ok((StatusCode::CREATED, Json(lecture.into())))
}

/// GET /api/v1/teacher/lectures/{teacherId}
pub async fn list_lectures(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> Result<Json<Vec<PublishedLecture>>, ApiError> {
    let teacher_id: UserId = parse_id(&teacher_id, "teacherId")?;
    let lectures = state.lecture_service.list_for_teacher(teacher_id).await?;
    Ok(Json(lectures))
}

/// GET /api/v1/teacher/lectures/{lectureId}/attendance
pub async fn live_attendance(
    State(state): State<AppState>,
    Path(lecture_id): Path<String>,
) -> Result<Json<Vec<LiveAttendanceEntry>>, ApiError> {
    let lecture_id: LectureId = parse_id(&lecture_id, "lectureId")?;
    Ok(Json(state.report_service.live(lecture_id).await?))
}

/// GET /api/v1/teacher/lecture-report/{lectureId}
pub async fn lecture_report(
    State(state): State<AppState>,
    Path(lecture_id): Path<String>,
) -> Result<Json<Vec<LectureReportEntry>>, ApiError> {
    let lecture_id: LectureId = parse_id(&lecture_id, "lectureId")?;
    Ok(Json(state.report_service.lecture_report(lecture_id).await?))
}

/// GET /api/v1/teacher/reports/defaulters/{teacherId}
pub async fn defaulters(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> Result<Json<Vec<Defaulter>>, ApiError> {
    let teacher_id: UserId = parse_id(&teacher_id, "teacherId")?;
    Ok(Json(state.report_service.defaulters(teacher_id).await?))
}
