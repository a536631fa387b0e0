//! Request context carrying the authenticated caller.

use serde::{Deserialize, Serialize};

use attend_auth::Claims;
use attend_core::types::UserId;
use attend_entity::user::UserRole;

/// Identity of the caller behind a verified bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    pub user_id: UserId,
    pub role: UserRole,
    pub name: String,
    /// Token expiry (seconds since epoch).
    pub expires_at: i64,
}

impl RequestContext {
    /// Builds a context from verified token claims.
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.user.id,
            role: claims.user.role,
            name: claims.user.name,
            expires_at: claims.exp,
        }
    }
}
