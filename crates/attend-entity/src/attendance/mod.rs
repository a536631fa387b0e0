//! Attendance entities and report read models.

pub mod model;
pub mod report;
pub mod status;

pub use model::AttendanceRecord;
pub use report::{AttendanceHistoryEntry, Defaulter, LectureReportEntry, LiveAttendanceEntry};
pub use status::AttendanceStatus;
