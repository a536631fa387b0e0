//! Lecture entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use attend_core::types::{LectureId, UserId};

/// Teacher name shown when a lecture's teacher cannot be resolved.
pub const UNKNOWN_TEACHER: &str = "Unknown Teacher";

/// A lecture session created by a teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Lecture {
    /// Store-generated identifier.
    pub id: LectureId,
    /// `"{subject} - {date}"`.
    pub name: String,
    pub subject: String,
    /// Date as entered by the teacher.
    pub date: String,
    /// Time as entered by the teacher.
    pub time: String,
    /// The creating teacher.
    pub teacher_id: UserId,
    /// Store-assigned creation time.
    pub created_at: DateTime<Utc>,
}

impl Lecture {
    /// Derive the display name of a lecture from its subject and date.
    pub fn derive_name(subject: &str, date: &str) -> String {
        format!("{subject} - {date}")
    }
}

/// Data required to create a lecture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLecture {
    pub name: String,
    pub subject: String,
    pub date: String,
    pub time: String,
    pub teacher_id: UserId,
}

impl CreateLecture {
    /// Build the insert payload, deriving the name.
    pub fn new(subject: String, date: String, time: String, teacher_id: UserId) -> Self {
        Self {
            name: Lecture::derive_name(&subject, &date),
            subject,
            date,
            time,
            teacher_id,
        }
    }
}

/// A lecture joined with its teacher's display name (student view).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LectureWithTeacher {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub lecture: Lecture,
    /// Teacher display name, or [`UNKNOWN_TEACHER`].
    pub teacher_name: String,
}
