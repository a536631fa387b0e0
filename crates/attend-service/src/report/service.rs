//! Attendance history, live roster, lecture report and defaulter list.

use std::sync::Arc;

use tracing::info;

use attend_core::config::ReportConfig;
use attend_core::error::AppError;
use attend_core::types::{LectureId, UserId};
use attend_database::{AttendanceStore, DefaulterStore};
use attend_entity::attendance::{
    AttendanceHistoryEntry, Defaulter, LectureReportEntry, LiveAttendanceEntry,
};

/// Read-only attendance views. Joins and aggregation run in the store.
#[derive(Clone)]
pub struct ReportService {
    attendance: Arc<dyn AttendanceStore>,
    defaulters: Arc<dyn DefaulterStore>,
    threshold_percent: f64,
}

impl std::fmt::Debug for ReportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportService")
            .field("threshold_percent", &self.threshold_percent)
            .finish_non_exhaustive()
    }
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(
        attendance: Arc<dyn AttendanceStore>,
        defaulters: Arc<dyn DefaulterStore>,
        config: &ReportConfig,
    ) -> Self {
        Self {
            attendance,
            defaulters,
            threshold_percent: config.defaulter_threshold_percent,
        }
    }

    /// A student's attendance, most recent first.
    pub async fn history(&self, student_id: UserId) -> Result<Vec<AttendanceHistoryEntry>, AppError> {
        self.attendance.history_for_student(student_id).await
    }

    /// Who has checked in to a lecture so far, oldest first.
    pub async fn live(&self, lecture_id: LectureId) -> Result<Vec<LiveAttendanceEntry>, AppError> {
        self.attendance.live_for_lecture(lecture_id).await
    }

    /// Full per-student breakdown of one lecture, oldest first.
    pub async fn lecture_report(
        &self,
        lecture_id: LectureId,
    ) -> Result<Vec<LectureReportEntry>, AppError> {
        self.attendance.report_for_lecture(lecture_id).await
    }

    /// Students below the defaulter threshold across a teacher's lectures.
    pub async fn defaulters(&self, teacher_id: UserId) -> Result<Vec<Defaulter>, AppError> {
        let rows = self
            .defaulters
            .defaulters(teacher_id, self.threshold_percent)
            .await?;

        for row in &rows {
            info!(
                teacher_id = %teacher_id,
                name = %row.name,
                percentage_present = row.percentage_present,
                "Defaulter"
            );
        }
        Ok(rows)
    }
}
