//! Attendance marking outcomes other than success.

use thiserror::Error;

use attend_core::error::AppError;

/// Failure of [`super::AttendanceRecorder::mark_attendance`].
#[derive(Debug, Error)]
pub enum AttendanceError {
    /// A record for this (lecture, student) pair already exists.
    #[error("Attendance already marked for this lecture.")]
    AlreadyMarked,
    /// The attendance store failed.
    #[error("Attendance store unavailable")]
    StoreUnavailable(#[source] AppError),
}

impl From<AttendanceError> for AppError {
    fn from(err: AttendanceError) -> Self {
        match err {
            AttendanceError::AlreadyMarked => {
                AppError::conflict(AttendanceError::AlreadyMarked.to_string())
            }
            AttendanceError::StoreUnavailable(source) => source,
        }
    }
}
