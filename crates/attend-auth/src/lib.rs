//! # attend-auth
//!
//! Credential primitives for Smart Attendance: argon2id password hashing
//! and HS256 JWT issuance/verification.

pub mod error;
pub mod jwt;
pub mod password;

pub use error::AuthError;
pub use jwt::{Claims, ClaimsUser, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
