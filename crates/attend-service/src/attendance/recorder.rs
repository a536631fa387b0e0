//! Attendance recorder enforcing one record per (lecture, student).

use std::sync::Arc;

use tracing::{error, info};

use attend_core::types::{AttendanceId, LectureId, UserId};
use attend_database::AttendanceStore;

use super::error::AttendanceError;

/// Inserts `present` records, at most one per (lecture, student) pair.
///
/// The check and the insert are one atomic store operation, so concurrent
/// calls for the same pair yield exactly one success.
#[derive(Clone)]
pub struct AttendanceRecorder {
    store: Arc<dyn AttendanceStore>,
}

impl std::fmt::Debug for AttendanceRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttendanceRecorder").finish_non_exhaustive()
    }
}

impl AttendanceRecorder {
    /// Creates a new recorder.
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self { store }
    }

    /// Marks `student_id` present for `lecture_id`.
    pub async fn mark_attendance(
        &self,
        lecture_id: LectureId,
        student_id: UserId,
    ) -> Result<AttendanceId, AttendanceError> {
        match self.store.insert_present(lecture_id, student_id).await {
            Ok(Some(record)) => {
                info!(
                    attendance_id = %record.id,
                    lecture_id = %lecture_id,
                    student_id = %student_id,
                    "Attendance marked"
                );
                Ok(record.id)
            }
            Ok(None) => {
                info!(lecture_id = %lecture_id, student_id = %student_id, "Attendance already marked");
                Err(AttendanceError::AlreadyMarked)
            }
            Err(e) => {
                error!(lecture_id = %lecture_id, student_id = %student_id, error = %e, "Failed to mark attendance");
                Err(AttendanceError::StoreUnavailable(e))
            }
        }
    }
}
