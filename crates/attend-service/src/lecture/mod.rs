//! Lecture sessions and their QR check-in links.

pub mod link;
pub mod service;

pub use link::QrLinkBuilder;
pub use service::{LectureService, PublishedLecture};
