//! # attend-service
//!
//! Business logic for Smart Attendance. Each service receives its store
//! handles and credential primitives at construction time as `Arc`
//! references; no service keeps state between calls.

pub mod attendance;
pub mod auth;
pub mod context;
pub mod lecture;
pub mod report;

pub use attendance::{AttendanceError, AttendanceRecorder};
pub use auth::{AuthService, LoginResult, RegisterUser};
pub use context::RequestContext;
pub use lecture::{LectureService, PublishedLecture, QrLinkBuilder};
pub use report::ReportService;
