//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use attend_core::types::UserId;

use super::role::UserRole;

/// A registered teacher or student.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Caller-supplied identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, unique across all users.
    pub email: String,
    /// Argon2 PHC string.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Portal the user belongs to.
    pub role: UserRole,
    /// Class roll number (students).
    pub roll_number: Option<String>,
    /// University enrollment number (students).
    pub enrollment_number: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    pub role: UserRole,
    pub roll_number: Option<String>,
    pub enrollment_number: Option<String>,
}
