//! Attendance record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use attend_core::types::{AttendanceId, LectureId, UserId};

use super::status::AttendanceStatus;

/// One student's attendance at one lecture.
///
/// At most one record exists per (`lecture_id`, `student_id`) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AttendanceRecord {
    pub id: AttendanceId,
    pub lecture_id: LectureId,
    pub student_id: UserId,
    pub status: AttendanceStatus,
    /// Store-assigned insert time.
    pub timestamp: DateTime<Utc>,
}
