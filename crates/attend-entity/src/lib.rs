//! # attend-entity
//!
//! Domain entity models for Smart Attendance. Every struct in this crate
//! represents a database row, a joined read model, or a domain value
//! object. Database rows derive `sqlx::FromRow`.

pub mod attendance;
pub mod lecture;
pub mod user;
