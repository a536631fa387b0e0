//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use attend_core::error::{AppError, ErrorKind};
use attend_core::result::AppResult;
use attend_entity::user::{CreateUser, User, UserRole};

use super::map_write_error;
use crate::store::UserStore;

const USER_COLUMNS: &str =
    "id, name, email, password_hash, role, roll_number, enrollment_number, created_at";

/// Repository for the `users` table.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let sql = format!(
            "INSERT INTO users (id, name, email, password_hash, role, roll_number, enrollment_number) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(data.id)
            .bind(&data.name)
            .bind(&data.email)
            .bind(&data.password_hash)
            .bind(data.role)
            .bind(&data.roll_number)
            .bind(&data.enrollment_number)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "Failed to create user"))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn list(&self, role: Option<UserRole>) -> AppResult<Vec<User>> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE ($1::user_role IS NULL OR role = $1) ORDER BY name ASC, email ASC"
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(role)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }
}
