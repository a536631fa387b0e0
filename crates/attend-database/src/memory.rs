//! In-memory store with the same semantics as the PostgreSQL repositories.
//!
//! All state sits behind one Tokio mutex, so every check-then-insert runs
//! atomically. Used by the test suites and for database-less local runs.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use attend_core::error::AppError;
use attend_core::result::AppResult;
use attend_core::types::{AttendanceId, LectureId, UserId};
use attend_entity::attendance::report::UNKNOWN_STUDENT;
use attend_entity::attendance::{
    AttendanceHistoryEntry, AttendanceRecord, AttendanceStatus, Defaulter, LectureReportEntry,
    LiveAttendanceEntry,
};
use attend_entity::lecture::model::UNKNOWN_TEACHER;
use attend_entity::lecture::{CreateLecture, Lecture, LectureWithTeacher};
use attend_entity::user::{CreateUser, User, UserRole};

use crate::store::{AttendanceStore, DefaulterStore, LectureStore, UserStore};

#[derive(Debug, Default)]
struct InnerState {
    users: Vec<User>,
    lectures: Vec<Lecture>,
    attendance: Vec<AttendanceRecord>,
    /// Last handed-out timestamp; later calls are strictly greater.
    clock: Option<DateTime<Utc>>,
    /// When set, every operation fails like an unreachable database.
    offline: bool,
}

impl InnerState {
    fn tick(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let next = match self.clock {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.clock = Some(next);
        next
    }

    fn ensure_online(&self) -> AppResult<()> {
        if self.offline {
            return Err(AppError::database("Store is unavailable"));
        }
        Ok(())
    }

    fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn lecture(&self, id: LectureId) -> Option<&Lecture> {
        self.lectures.iter().find(|l| l.id == id)
    }
}

/// Store implementation backed by process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<InnerState>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle simulated unavailability.
    pub async fn set_offline(&self, offline: bool) {
        self.state.lock().await.offline = offline;
    }

    /// Delete a user, leaving their lectures and attendance in place.
    ///
    /// Lets callers exercise the "unknown teacher/student" fallbacks.
    pub async fn remove_user(&self, id: UserId) {
        self.state.lock().await.users.retain(|u| u.id != id);
    }

    /// Delete a lecture, leaving its attendance records in place.
    pub async fn remove_lecture(&self, id: LectureId) {
        self.state.lock().await.lectures.retain(|l| l.id != id);
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut state = self.state.lock().await;
        state.ensure_online()?;

        if state.users.iter().any(|u| u.id == data.id) {
            return Err(AppError::conflict(
                "Failed to create user: duplicate value (users_pkey)",
            ));
        }
        if state.users.iter().any(|u| u.email == data.email) {
            return Err(AppError::conflict(
                "Failed to create user: duplicate value (users_email_key)",
            ));
        }

        let user = User {
            id: data.id,
            name: data.name.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            role: data.role,
            roll_number: data.roll_number.clone(),
            enrollment_number: data.enrollment_number.clone(),
            created_at: state.tick(),
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        state.ensure_online()?;
        Ok(state.users.iter().find(|u| u.email == email).cloned())
    }

    async fn list(&self, role: Option<UserRole>) -> AppResult<Vec<User>> {
        let state = self.state.lock().await;
        state.ensure_online()?;
        let mut users: Vec<User> = state
            .users
            .iter()
            .filter(|u| role.is_none_or(|r| u.role == r))
            .cloned()
            .collect();
        users.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.email.cmp(&b.email)));
        Ok(users)
    }
}

#[async_trait]
impl LectureStore for MemoryStore {
    async fn create(&self, data: &CreateLecture) -> AppResult<Lecture> {
        let mut state = self.state.lock().await;
        state.ensure_online()?;

        let lecture = Lecture {
            id: LectureId::new(),
            name: data.name.clone(),
            subject: data.subject.clone(),
            date: data.date.clone(),
            time: data.time.clone(),
            teacher_id: data.teacher_id,
            created_at: state.tick(),
        };
        state.lectures.push(lecture.clone());
        Ok(lecture)
    }

    async fn list_by_teacher(&self, teacher_id: UserId) -> AppResult<Vec<Lecture>> {
        let state = self.state.lock().await;
        state.ensure_online()?;
        let mut lectures: Vec<Lecture> = state
            .lectures
            .iter()
            .filter(|l| l.teacher_id == teacher_id)
            .cloned()
            .collect();
        lectures.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(lectures)
    }

    async fn list_with_teacher(&self) -> AppResult<Vec<LectureWithTeacher>> {
        let state = self.state.lock().await;
        state.ensure_online()?;
        let mut lectures: Vec<LectureWithTeacher> = state
            .lectures
            .iter()
            .map(|l| LectureWithTeacher {
                lecture: l.clone(),
                teacher_name: state
                    .user(l.teacher_id)
                    .map(|u| u.name.clone())
                    .unwrap_or_else(|| UNKNOWN_TEACHER.to_string()),
            })
            .collect();
        lectures.sort_by(|a, b| b.lecture.created_at.cmp(&a.lecture.created_at));
        Ok(lectures)
    }
}

#[async_trait]
impl AttendanceStore for MemoryStore {
    async fn insert_present(
        &self,
        lecture_id: LectureId,
        student_id: UserId,
    ) -> AppResult<Option<AttendanceRecord>> {
        let mut state = self.state.lock().await;
        state.ensure_online()?;

        if state.lecture(lecture_id).is_none() || state.user(student_id).is_none() {
            return Err(AppError::database(
                "Failed to insert attendance record: foreign key violation",
            ));
        }
        if state
            .attendance
            .iter()
            .any(|a| a.lecture_id == lecture_id && a.student_id == student_id)
        {
            return Ok(None);
        }

        let record = AttendanceRecord {
            id: AttendanceId::new(),
            lecture_id,
            student_id,
            status: AttendanceStatus::Present,
            timestamp: state.tick(),
        };
        state.attendance.push(record.clone());
        Ok(Some(record))
    }

    async fn history_for_student(
        &self,
        student_id: UserId,
    ) -> AppResult<Vec<AttendanceHistoryEntry>> {
        let state = self.state.lock().await;
        state.ensure_online()?;
        let mut entries: Vec<AttendanceHistoryEntry> = state
            .attendance
            .iter()
            .filter(|a| a.student_id == student_id)
            .filter_map(|a| {
                let lecture = state.lecture(a.lecture_id)?;
                Some(AttendanceHistoryEntry {
                    id: a.id,
                    lecture_id: a.lecture_id,
                    student_id: a.student_id,
                    status: a.status,
                    timestamp: a.timestamp,
                    lecture_name: lecture.name.clone(),
                    lecture_subject: lecture.subject.clone(),
                    lecture_date: lecture.date.clone(),
                    lecture_time: lecture.time.clone(),
                })
            })
            .collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }

    async fn live_for_lecture(&self, lecture_id: LectureId) -> AppResult<Vec<LiveAttendanceEntry>> {
        let state = self.state.lock().await;
        state.ensure_online()?;
        let mut entries: Vec<LiveAttendanceEntry> = state
            .attendance
            .iter()
            .filter(|a| a.lecture_id == lecture_id)
            .map(|a| LiveAttendanceEntry {
                id: a.id,
                timestamp: a.timestamp,
                student_name: state
                    .user(a.student_id)
                    .map(|u| u.name.clone())
                    .unwrap_or_else(|| UNKNOWN_STUDENT.to_string()),
            })
            .collect();
        entries.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(entries)
    }

    async fn report_for_lecture(
        &self,
        lecture_id: LectureId,
    ) -> AppResult<Vec<LectureReportEntry>> {
        let state = self.state.lock().await;
        state.ensure_online()?;
        let mut entries: Vec<LectureReportEntry> = state
            .attendance
            .iter()
            .filter(|a| a.lecture_id == lecture_id)
            .map(|a| {
                let student = state.user(a.student_id);
                LectureReportEntry {
                    attendance_id: a.id,
                    timestamp: a.timestamp,
                    student_id: student.map(|u| u.id),
                    student_name: student
                        .map(|u| u.name.clone())
                        .unwrap_or_else(|| UNKNOWN_STUDENT.to_string()),
                    roll_number: student.and_then(|u| u.roll_number.clone()),
                    enrollment_number: student.and_then(|u| u.enrollment_number.clone()),
                }
            })
            .collect();
        entries.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(entries)
    }
}

#[async_trait]
impl DefaulterStore for MemoryStore {
    async fn defaulters(
        &self,
        teacher_id: UserId,
        threshold_percent: f64,
    ) -> AppResult<Vec<Defaulter>> {
        let state = self.state.lock().await;
        state.ensure_online()?;

        let lecture_ids: Vec<LectureId> = state
            .lectures
            .iter()
            .filter(|l| l.teacher_id == teacher_id)
            .map(|l| l.id)
            .collect();
        let total = lecture_ids.len() as i64;
        if total == 0 {
            return Ok(Vec::new());
        }

        let mut rows: Vec<Defaulter> = state
            .users
            .iter()
            .filter(|u| u.role == UserRole::Student)
            .filter_map(|u| {
                let attended = state
                    .attendance
                    .iter()
                    .filter(|a| {
                        a.student_id == u.id
                            && a.status == AttendanceStatus::Present
                            && lecture_ids.contains(&a.lecture_id)
                    })
                    .count() as i64;
                let percentage_present = Defaulter::percentage(attended, total);
                (percentage_present < threshold_percent).then(|| Defaulter {
                    student_id: u.id,
                    name: u.name.clone(),
                    roll_number: u.roll_number.clone(),
                    enrollment_number: u.enrollment_number.clone(),
                    attended,
                    total_lectures: total,
                    percentage_present,
                })
            })
            .collect();
        rows.sort_by(|a, b| {
            a.percentage_present
                .partial_cmp(&b.percentage_present)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(rows)
    }
}
