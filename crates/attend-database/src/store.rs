//! Store traits the service layer depends on.
//!
//! Services receive an `Arc<dyn ...Store>` at construction so that they
//! can run against PostgreSQL ([`crate::repositories`]) or the in-memory
//! store ([`crate::memory`]) unchanged.

use async_trait::async_trait;

use attend_core::result::AppResult;
use attend_core::types::{LectureId, UserId};
use attend_entity::attendance::{
    AttendanceHistoryEntry, AttendanceRecord, Defaulter, LectureReportEntry, LiveAttendanceEntry,
};
use attend_entity::lecture::{CreateLecture, Lecture, LectureWithTeacher};
use attend_entity::user::{CreateUser, User, UserRole};

/// Credential store.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Insert a user. A duplicate email or id fails with
    /// `ErrorKind::Conflict`.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Find a user by exact email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List users, optionally restricted to one role, ordered by name.
    async fn list(&self, role: Option<UserRole>) -> AppResult<Vec<User>>;
}

/// Lecture store.
#[async_trait]
pub trait LectureStore: Send + Sync + 'static {
    /// Insert a lecture; id and `created_at` are assigned by the store.
    async fn create(&self, data: &CreateLecture) -> AppResult<Lecture>;

    /// A teacher's lectures, newest first.
    async fn list_by_teacher(&self, teacher_id: UserId) -> AppResult<Vec<Lecture>>;

    /// All lectures with their teacher's name, newest first.
    async fn list_with_teacher(&self) -> AppResult<Vec<LectureWithTeacher>>;
}

/// Attendance store.
#[async_trait]
pub trait AttendanceStore: Send + Sync + 'static {
    /// Atomically insert a `present` record for the pair.
    ///
    /// Returns `None` when a record for (`lecture_id`, `student_id`)
    /// already exists; two concurrent calls for the same pair never both
    /// return `Some`.
    async fn insert_present(
        &self,
        lecture_id: LectureId,
        student_id: UserId,
    ) -> AppResult<Option<AttendanceRecord>>;

    /// A student's records with lecture context, most recent first.
    /// Records whose lecture cannot be resolved are omitted.
    async fn history_for_student(&self, student_id: UserId)
    -> AppResult<Vec<AttendanceHistoryEntry>>;

    /// Records of one lecture with student names, oldest first.
    async fn live_for_lecture(&self, lecture_id: LectureId) -> AppResult<Vec<LiveAttendanceEntry>>;

    /// Records of one lecture with full student details, oldest first.
    async fn report_for_lecture(&self, lecture_id: LectureId)
    -> AppResult<Vec<LectureReportEntry>>;
}

/// Defaulter aggregation.
#[async_trait]
pub trait DefaulterStore: Send + Sync + 'static {
    /// Students whose percentage present across `teacher_id`'s lectures is
    /// strictly below `threshold_percent`, lowest percentage first.
    async fn defaulters(
        &self,
        teacher_id: UserId,
        threshold_percent: f64,
    ) -> AppResult<Vec<Defaulter>>;
}
