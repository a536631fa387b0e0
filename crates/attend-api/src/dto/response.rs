//! Response DTOs.
//!
//! Bodies are returned bare (no envelope) to keep the shapes the web
//! frontend already consumes.

use serde::{Deserialize, Serialize};

use attend_auth::ClaimsUser;
use attend_core::types::{AttendanceId, LectureId, UserId};
use attend_entity::user::UserRole;
use attend_service::{LoginResult, PublishedLecture, RequestContext};

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response: token plus the claims it carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: ClaimsUser,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            token: result.token,
            user: result.user,
        }
    }
}

/// GET /api/v1/auth/me
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub id: UserId,
    pub role: UserRole,
    pub name: String,
    /// Token expiry (seconds since epoch).
    pub exp: i64,
}

impl From<&RequestContext> for MeResponse {
    fn from(ctx: &RequestContext) -> Self {
        Self {
            id: ctx.user_id,
            role: ctx.role,
            name: ctx.name.clone(),
            exp: ctx.expires_at,
        }
    }
}

/// POST /api/v1/teacher/lectures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedLectureResponse {
    pub id: LectureId,
    #[serde(rename = "qrUrl")]
    pub qr_url: String,
    pub name: String,
    pub subject: String,
    pub date: String,
    pub time: String,
    pub teacher_id: UserId,
}

impl From<PublishedLecture> for CreatedLectureResponse {
    fn from(p: PublishedLecture) -> Self {
        Self {
            id: p.lecture.id,
            qr_url: p.qr_url,
            name: p.lecture.name,
            subject: p.lecture.subject,
            date: p.lecture.date,
            time: p.lecture.time,
            teacher_id: p.lecture.teacher_id,
        }
    }
}

/// POST /api/v1/student/mark-attendance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAttendanceResponse {
    pub message: String,
    #[serde(rename = "newRecordId")]
    pub new_record_id: AttendanceId,
}

/// GET /api/health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
