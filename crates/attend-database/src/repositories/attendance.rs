//! Attendance repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use attend_core::error::{AppError, ErrorKind};
use attend_core::result::AppResult;
use attend_core::types::{LectureId, UserId};
use attend_entity::attendance::{
    AttendanceHistoryEntry, AttendanceRecord, AttendanceStatus, LectureReportEntry,
    LiveAttendanceEntry,
};

use crate::store::AttendanceStore;

/// Repository for the `attendance` table.
#[derive(Debug, Clone)]
pub struct AttendanceRepository {
    pool: PgPool,
}

impl AttendanceRepository {
    /// Create a new attendance repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceStore for AttendanceRepository {
    async fn insert_present(
        &self,
        lecture_id: LectureId,
        student_id: UserId,
    ) -> AppResult<Option<AttendanceRecord>> {
        // The unique (lecture_id, student_id) constraint arbitrates races;
        // the losing insert returns no row.
        let result = sqlx::query_as::<_, AttendanceRecord>(
            r#"INSERT INTO attendance (lecture_id, student_id, status)
            VALUES ($1, $2, $3)
            ON CONFLICT (lecture_id, student_id) DO NOTHING
            RETURNING id, lecture_id, student_id, status, "timestamp""#,
        )
        .bind(lecture_id)
        .bind(student_id)
        .bind(AttendanceStatus::Present)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(record) => Ok(record),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Database,
                "Failed to insert attendance record",
                e,
            )),
        }
    }

    async fn history_for_student(
        &self,
        student_id: UserId,
    ) -> AppResult<Vec<AttendanceHistoryEntry>> {
        sqlx::query_as::<_, AttendanceHistoryEntry>(
            r#"SELECT a.id, a.lecture_id, a.student_id, a.status, a."timestamp",
                l.name AS lecture_name, l.subject AS lecture_subject,
                l.date AS lecture_date, l.time AS lecture_time
            FROM attendance a
            INNER JOIN lectures l ON l.id = a.lecture_id
            WHERE a.student_id = $1
            ORDER BY a."timestamp" DESC"#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load attendance history", e)
        })
    }

    async fn live_for_lecture(&self, lecture_id: LectureId) -> AppResult<Vec<LiveAttendanceEntry>> {
        sqlx::query_as::<_, LiveAttendanceEntry>(
            r#"SELECT a.id, a."timestamp", COALESCE(u.name, 'Unknown') AS student_name
            FROM attendance a
            LEFT JOIN users u ON u.id = a.student_id
            WHERE a.lecture_id = $1
            ORDER BY a."timestamp" ASC"#,
        )
        .bind(lecture_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load live attendance", e)
        })
    }

    async fn report_for_lecture(
        &self,
        lecture_id: LectureId,
    ) -> AppResult<Vec<LectureReportEntry>> {
        sqlx::query_as::<_, LectureReportEntry>(
            r#"SELECT a.id AS attendance_id, a."timestamp",
                u.id AS student_id, COALESCE(u.name, 'Unknown') AS student_name,
                u.roll_number, u.enrollment_number
            FROM attendance a
            LEFT JOIN users u ON u.id = a.student_id
            WHERE a.lecture_id = $1
            ORDER BY a."timestamp" ASC"#,
        )
        .bind(lecture_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load lecture report", e)
        })
    }
}
