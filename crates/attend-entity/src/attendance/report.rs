//! Joined read models returned by the attendance reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use attend_core::types::{AttendanceId, LectureId, UserId};

use super::status::AttendanceStatus;

/// Student name shown when a record's student cannot be resolved.
pub const UNKNOWN_STUDENT: &str = "Unknown";

/// A student's attendance record with its lecture context.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AttendanceHistoryEntry {
    pub id: AttendanceId,
    pub lecture_id: LectureId,
    pub student_id: UserId,
    pub status: AttendanceStatus,
    pub timestamp: DateTime<Utc>,
    pub lecture_name: String,
    pub lecture_subject: String,
    pub lecture_date: String,
    pub lecture_time: String,
}

/// One row of the live "attendance so far" roster.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LiveAttendanceEntry {
    pub id: AttendanceId,
    pub timestamp: DateTime<Utc>,
    pub student_name: String,
}

/// One row of the full per-student report for a lecture.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LectureReportEntry {
    pub attendance_id: AttendanceId,
    pub timestamp: DateTime<Utc>,
    pub student_id: Option<UserId>,
    pub student_name: String,
    pub roll_number: Option<String>,
    pub enrollment_number: Option<String>,
}

/// A student whose attendance across a teacher's lectures is below the
/// defaulter threshold.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Defaulter {
    pub student_id: UserId,
    pub name: String,
    pub roll_number: Option<String>,
    pub enrollment_number: Option<String>,
    /// Lectures of this teacher the student attended.
    pub attended: i64,
    /// Lectures this teacher has created.
    pub total_lectures: i64,
    /// `attended * 100 / total_lectures`, rounded to two decimals.
    pub percentage_present: f64,
}

impl Defaulter {
    /// Percentage present, rounded to two decimals. Zero when there are no
    /// lectures.
    pub fn percentage(attended: i64, total_lectures: i64) -> f64 {
        if total_lectures <= 0 {
            return 0.0;
        }
        let raw = attended as f64 * 100.0 / total_lectures as f64;
        (raw * 100.0).round() / 100.0
    }
}
