//! Authentication error taxonomy.

use thiserror::Error;

use attend_core::error::{AppError, ErrorKind};
use attend_entity::user::UserRole;

/// Failures of registration, login and token verification.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Required input was missing or malformed.
    #[error("{0}")]
    Validation(String),
    /// The email or id is already registered.
    #[error("Email or ID already exists.")]
    DuplicateIdentity,
    /// Unknown email or wrong password.
    #[error("Invalid credentials.")]
    InvalidCredentials,
    /// The account exists but belongs to the other login portal.
    #[error("Access denied. Please use the '{actual_role}' login portal.")]
    WrongPortal { actual_role: UserRole },
    /// The token's `exp` lies in the past.
    #[error("Token has expired")]
    ExpiredToken,
    /// The token was not signed with our secret.
    #[error("Invalid token signature")]
    InvalidSignature,
    /// The token could not be decoded.
    #[error("Malformed token")]
    Malformed,
    /// The credential store failed.
    #[error("Credential store unavailable")]
    StoreUnavailable(#[source] AppError),
    /// Hashing or signing failed.
    #[error("{0}")]
    Internal(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let message = err.to_string();
        match err {
            AuthError::Validation(msg) => AppError::validation(msg),
            AuthError::DuplicateIdentity => AppError::conflict(message),
            AuthError::InvalidCredentials
            | AuthError::ExpiredToken
            | AuthError::InvalidSignature
            | AuthError::Malformed => AppError::authentication(message),
            AuthError::WrongPortal { actual_role } => AppError::authorization(message)
                .with_details(serde_json::json!({ "role": actual_role.as_str() })),
            AuthError::StoreUnavailable(source) => {
                let message = format!("Credential store unavailable: {}", source.message);
                AppError::with_source(ErrorKind::Database, message, source)
            }
            AuthError::Internal(msg) => AppError::internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_portal_carries_role() {
        let err: AppError = AuthError::WrongPortal {
            actual_role: UserRole::Teacher,
        }
        .into();
        assert_eq!(err.kind, ErrorKind::Authorization);
        assert_eq!(
            err.message,
            "Access denied. Please use the 'teacher' login portal."
        );
        assert_eq!(err.details.unwrap()["role"], "teacher");
    }

    #[test]
    fn test_token_errors_are_authentication() {
        for e in [
            AuthError::ExpiredToken,
            AuthError::InvalidSignature,
            AuthError::Malformed,
            AuthError::InvalidCredentials,
        ] {
            assert_eq!(AppError::from(e).kind, ErrorKind::Authentication);
        }
    }

    #[test]
    fn test_store_failure_is_infrastructure() {
        let err: AppError = AuthError::StoreUnavailable(AppError::database("down")).into();
        assert!(err.kind.is_infrastructure());
    }
}
