//! Auth service: registration and portal login.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use attend_auth::{AuthError, Claims, ClaimsUser, JwtDecoder, JwtEncoder, PasswordHasher};
use attend_core::error::ErrorKind;
use attend_core::types::UserId;
use attend_database::UserStore;
use attend_entity::user::{CreateUser, UserRole};

/// Input for [`AuthService::register`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUser {
    /// Caller-supplied id; a fresh one is generated when absent.
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub roll_number: Option<String>,
    pub enrollment_number: Option<String>,
}

/// Token plus the identity summary it encodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResult {
    pub token: String,
    pub user: ClaimsUser,
}

/// Orchestrates the credential store, password hasher and token issuer.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
            decoder,
        }
    }

    /// Registers a user. Does not log them in.
    ///
    /// Uniqueness is left to the store: of two concurrent registrations for
    /// one email exactly one succeeds and the other gets
    /// [`AuthError::DuplicateIdentity`].
    pub async fn register(&self, input: RegisterUser) -> Result<UserId, AuthError> {
        require("name", &input.name)?;
        require("email", &input.email)?;
        require("password", &input.password)?;

        let password_hash = self.hasher.hash(&input.password)?;
        let data = CreateUser {
            id: input.id.unwrap_or_default(),
            name: input.name,
            email: input.email,
            password_hash,
            role: input.role,
            roll_number: non_blank(input.roll_number),
            enrollment_number: non_blank(input.enrollment_number),
        };

        match self.users.create(&data).await {
            Ok(user) => {
                info!(user_id = %user.id, role = %user.role, "User registered");
                Ok(user.id)
            }
            Err(e) if e.kind == ErrorKind::Conflict => {
                info!(email = %data.email, "Registration rejected: identity already exists");
                Err(AuthError::DuplicateIdentity)
            }
            Err(e) => {
                error!(error = %e, "Registration failed");
                Err(AuthError::StoreUnavailable(e))
            }
        }
    }

    /// Logs a user in through the portal for `expected_role`.
    ///
    /// The role is compared before the password is verified, so a wrong
    /// portal is reported even when the password is wrong too.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        expected_role: UserRole,
    ) -> Result<LoginResult, AuthError> {
        require("email", email)?;
        require("password", password)?;

        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(AuthError::StoreUnavailable)?
            .ok_or(AuthError::InvalidCredentials)?;

        if user.role != expected_role {
            debug!(user_id = %user.id, actual = %user.role, expected = %expected_role, "Wrong login portal");
            return Err(AuthError::WrongPortal {
                actual_role: user.role,
            });
        }

        if !self.hasher.verify(password, &user.password_hash) {
            debug!(user_id = %user.id, "Password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let summary = ClaimsUser {
            id: user.id,
            role: user.role,
            name: user.name,
        };
        let token = self.encoder.issue(&summary)?;

        info!(user_id = %summary.id, role = %summary.role, "User logged in");
        Ok(LoginResult {
            token,
            user: summary,
        })
    }

    /// Verifies a bearer token.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.decoder.verify(token)
    }
}

fn require(field: &str, value: &str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        return Err(AuthError::Validation(format!("Field '{field}' is required")));
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
