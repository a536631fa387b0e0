//! Lecture repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use attend_core::error::{AppError, ErrorKind};
use attend_core::result::AppResult;
use attend_core::types::UserId;
use attend_entity::lecture::{CreateLecture, Lecture, LectureWithTeacher};

use super::map_write_error;
use crate::store::LectureStore;

/// Repository for the `lectures` table.
#[derive(Debug, Clone)]
pub struct LectureRepository {
    pool: PgPool,
}

impl LectureRepository {
    /// Create a new lecture repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LectureStore for LectureRepository {
    async fn create(&self, data: &CreateLecture) -> AppResult<Lecture> {
        sqlx::query_as::<_, Lecture>(
            r#"INSERT INTO lectures (name, subject, date, time, teacher_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, subject, date, time, teacher_id, created_at"#,
        )
        .bind(&data.name)
        .bind(&data.subject)
        .bind(&data.date)
        .bind(&data.time)
        .bind(data.teacher_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create lecture"))
    }

    async fn list_by_teacher(&self, teacher_id: UserId) -> AppResult<Vec<Lecture>> {
        sqlx::query_as::<_, Lecture>(
            r#"SELECT id, name, subject, date, time, teacher_id, created_at
            FROM lectures WHERE teacher_id = $1
            ORDER BY created_at DESC"#,
        )
        .bind(teacher_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list lectures by teacher", e)
        })
    }

    async fn list_with_teacher(&self) -> AppResult<Vec<LectureWithTeacher>> {
        sqlx::query_as::<_, LectureWithTeacher>(
            r#"SELECT l.id, l.name, l.subject, l.date, l.time, l.teacher_id, l.created_at,
                COALESCE(u.name, 'Unknown Teacher') AS teacher_name
            FROM lectures l
            LEFT JOIN users u ON u.id = l.teacher_id
            ORDER BY l.created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list lectures", e))
    }
}
