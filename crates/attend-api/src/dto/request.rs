//! Request DTOs with validation.
//!
//! Required string fields default to empty so that a missing field and an
//! empty one produce the same validation error.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use attend_core::error::AppError;
use attend_core::types::UserId;
use attend_entity::user::UserRole;
use attend_service::RegisterUser;

use crate::extractors::path::parse_id;

/// POST /api/v1/auth/register
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Caller-supplied user id; generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required registration fields."))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required registration fields."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required registration fields."))]
    pub password: String,
    #[serde(default)]
    #[validate(custom(function = "validate_role"))]
    pub role: String,
    #[serde(default)]
    pub roll_number: Option<String>,
    #[serde(default)]
    pub enrollment_number: Option<String>,
}

impl RegisterRequest {
    /// Converts into the service input, parsing the id and role.
    pub fn into_input(self) -> Result<RegisterUser, AppError> {
        let id = match self.id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_id::<UserId>(raw, "id")?),
        };
        Ok(RegisterUser {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
            role: self.role.parse::<UserRole>()?,
            roll_number: self.roll_number,
            enrollment_number: self.enrollment_number,
        })
    }
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    if role.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message("Missing required registration fields.".into()));
    }
    role.parse::<UserRole>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("role").with_message("Role must be 'teacher' or 'student'.".into()))
}

/// POST /api/v1/auth/{teacher,student}/login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// POST /api/v1/teacher/lectures
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLectureRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Time is required"))]
    pub time: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Teacher id is required"))]
    pub teacher_id: String,
}

/// POST /api/v1/student/mark-attendance
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MarkAttendanceRequest {
    #[serde(default, rename = "lectureId")]
    #[validate(length(min = 1, message = "lectureId is required"))]
    pub lecture_id: String,
    #[serde(default, rename = "studentId")]
    #[validate(length(min = 1, message = "studentId is required"))]
    pub student_id: String,
}
