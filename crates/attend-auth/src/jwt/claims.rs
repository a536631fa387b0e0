//! JWT claims payload.

use serde::{Deserialize, Serialize};

use attend_core::types::UserId;
use attend_entity::user::UserRole;

/// Identity summary embedded in every token under the `user` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimsUser {
    pub id: UserId,
    pub role: UserRole,
    pub name: String,
}

/// JWT claims: `{ user: { id, role, name }, iat, exp }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user: ClaimsUser,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
