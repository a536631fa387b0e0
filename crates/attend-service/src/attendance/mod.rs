//! Attendance marking.

pub mod error;
pub mod recorder;

pub use error::AttendanceError;
pub use recorder::AttendanceRecorder;
