//! # attend-api
//!
//! HTTP API layer for Smart Attendance: axum router, handlers, DTOs,
//! extractors, middleware and the server bootstrap.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::{AppState, Stores};
