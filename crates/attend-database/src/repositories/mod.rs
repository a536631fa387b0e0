//! PostgreSQL implementations of the store traits.

pub mod attendance;
pub mod lecture;
pub mod report;
pub mod user;

pub use attendance::AttendanceRepository;
pub use lecture::LectureRepository;
pub use report::ReportRepository;
pub use user::UserRepository;

use attend_core::error::{AppError, ErrorKind};

/// Map a driver error, turning unique violations (SQLSTATE 23505) into
/// `Conflict`.
pub(crate) fn map_write_error(e: sqlx::Error, context: &'static str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            let constraint = db_err.constraint().unwrap_or("unique").to_string();
            return AppError::conflict(format!("{context}: duplicate value ({constraint})"));
        }
    }
    AppError::with_source(ErrorKind::Database, context, e)
}
