//! Defaulter aggregation.

use async_trait::async_trait;
use sqlx::PgPool;

use attend_core::error::{AppError, ErrorKind};
use attend_core::result::AppResult;
use attend_core::types::UserId;
use attend_entity::attendance::Defaulter;

use crate::store::DefaulterStore;

/// Aggregate queries over lectures and attendance.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    /// Create a new report repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DefaulterStore for ReportRepository {
    async fn defaulters(
        &self,
        teacher_id: UserId,
        threshold_percent: f64,
    ) -> AppResult<Vec<Defaulter>> {
        sqlx::query_as::<_, Defaulter>(
            r#"WITH teacher_lectures AS (
                SELECT id FROM lectures WHERE teacher_id = $1
            ),
            total AS (
                SELECT COUNT(*)::BIGINT AS n FROM teacher_lectures
            ),
            attended AS (
                SELECT a.student_id, COUNT(*)::BIGINT AS n
                FROM attendance a
                INNER JOIN teacher_lectures tl ON tl.id = a.lecture_id
                WHERE a.status = 'present'
                GROUP BY a.student_id
            ),
            scored AS (
                SELECT u.id AS student_id, u.name, u.roll_number, u.enrollment_number,
                    COALESCE(att.n, 0)::BIGINT AS attended,
                    total.n AS total_lectures,
                    ROUND(COALESCE(att.n, 0) * 100.0 / NULLIF(total.n, 0), 2)::FLOAT8
                        AS percentage_present
                FROM users u
                CROSS JOIN total
                LEFT JOIN attended att ON att.student_id = u.id
                WHERE u.role = 'student' AND total.n > 0
            )
            SELECT student_id, name, roll_number, enrollment_number,
                attended, total_lectures, percentage_present
            FROM scored
            WHERE percentage_present < $2::FLOAT8
            ORDER BY percentage_present ASC, name ASC"#,
        )
        .bind(teacher_id)
        .bind(threshold_percent)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to compute defaulters", e))
    }
}
