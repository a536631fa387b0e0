//! Registration and role-gated login.

pub mod service;

pub use service::{AuthService, LoginResult, RegisterUser};
