//! Lecture session entities.

pub mod model;

pub use model::{CreateLecture, Lecture, LectureWithTeacher};
