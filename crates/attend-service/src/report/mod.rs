//! Attendance views and aggregated reports.

pub mod service;

pub use service::ReportService;
