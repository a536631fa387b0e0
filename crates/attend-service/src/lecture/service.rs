//! Lecture creation and listing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use attend_core::error::AppError;
use attend_core::types::UserId;
use attend_database::LectureStore;
use attend_entity::lecture::{CreateLecture, Lecture, LectureWithTeacher};

use super::link::QrLinkBuilder;

/// A lecture together with its check-in link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedLecture {
    #[serde(flatten)]
    pub lecture: Lecture,
    #[serde(rename = "qrUrl")]
    pub qr_url: String,
}

/// Creates and lists lectures.
#[derive(Clone)]
pub struct LectureService {
    lectures: Arc<dyn LectureStore>,
    links: QrLinkBuilder,
}

impl std::fmt::Debug for LectureService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LectureService")
            .field("links", &self.links)
            .finish_non_exhaustive()
    }
}

impl LectureService {
    /// Creates a new lecture service.
    pub fn new(lectures: Arc<dyn LectureStore>, links: QrLinkBuilder) -> Self {
        Self { lectures, links }
    }

    /// Creates a lecture named `"{subject} - {date}"`.
    ///
    /// `date` and `time` are stored as given.
    pub async fn create(
        &self,
        subject: String,
        date: String,
        time: String,
        teacher_id: UserId,
    ) -> Result<PublishedLecture, AppError> {
        for (field, value) in [("subject", &subject), ("date", &date), ("time", &time)] {
            if value.trim().is_empty() {
                return Err(AppError::validation(format!("Field '{field}' is required")));
            }
        }

        let lecture = self
            .lectures
            .create(&CreateLecture::new(subject, date, time, teacher_id))
            .await?;
        info!(lecture_id = %lecture.id, teacher_id = %teacher_id, name = %lecture.name, "Lecture created");

        Ok(self.publish(lecture))
    }

    /// A teacher's lectures, newest first, each with its link.
    pub async fn list_for_teacher(
        &self,
        teacher_id: UserId,
    ) -> Result<Vec<PublishedLecture>, AppError> {
        let lectures = self.lectures.list_by_teacher(teacher_id).await?;
        Ok(lectures.into_iter().map(|l| self.publish(l)).collect())
    }

    /// Every lecture, newest first, with the teacher's name.
    pub async fn list_all_for_students(&self) -> Result<Vec<LectureWithTeacher>, AppError> {
        self.lectures.list_with_teacher().await
    }

    fn publish(&self, lecture: Lecture) -> PublishedLecture {
        PublishedLecture {
            qr_url: self.links.link_for(lecture.id),
            lecture,
        }
    }
}

#[cfg(test)]
mod tests {
    use attend_core::config::FrontendConfig;
    use attend_core::error::ErrorKind;
    use attend_database::{MemoryStore, UserStore};
    use attend_entity::user::{CreateUser, UserRole};

    use super::*;

    fn service(store: MemoryStore) -> LectureService {
        LectureService::new(
            Arc::new(store),
            QrLinkBuilder::new(&FrontendConfig::default()),
        )
    }

    #[tokio::test]
    async fn test_create_derives_name_and_link() {
        let lectures = service(MemoryStore::new());
        let created = lectures
            .create(
                "Math".to_string(),
                "2024-01-01".to_string(),
                "10:00".to_string(),
                UserId::new(),
            )
            .await
            .unwrap();
        assert_eq!(created.lecture.name, "Math - 2024-01-01");
        assert!(
            created
                .qr_url
                .ends_with(&format!("/attend?lectureId={}", created.lecture.id))
        );
    }

    #[tokio::test]
    async fn test_blank_subject_rejected() {
        let lectures = service(MemoryStore::new());
        let err = lectures
            .create(
                " ".to_string(),
                "2024-01-01".to_string(),
                "10:00".to_string(),
                UserId::new(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_teacher_listing_newest_first() {
        let lectures = service(MemoryStore::new());
        let teacher = UserId::new();
        for date in ["2024-01-01", "2024-01-02", "2024-01-03"] {
            lectures
                .create("Math".into(), date.into(), "10:00".into(), teacher)
                .await
                .unwrap();
        }
        lectures
            .create("Art".into(), "2024-01-04".into(), "10:00".into(), UserId::new())
            .await
            .unwrap();

        let listed = lectures.list_for_teacher(teacher).await.unwrap();
        let dates: Vec<_> = listed.iter().map(|p| p.lecture.date.as_str()).collect();
        assert_eq!(dates, ["2024-01-03", "2024-01-02", "2024-01-01"]);
        assert!(listed.iter().all(|p| p.qr_url.contains(&p.lecture.id.to_string())));
    }

    #[tokio::test]
    async fn test_student_listing_has_teacher_names() {
        let store = MemoryStore::new();
        let lectures = service(store.clone());
        let teacher = UserStore::create(
            &store,
            &CreateUser {
                id: UserId::new(),
                name: "Prof. Ito".to_string(),
                email: "ito@x.io".to_string(),
                password_hash: "h".to_string(),
                role: UserRole::Teacher,
                roll_number: None,
                enrollment_number: None,
            },
        )
        .await
        .unwrap();
        lectures
            .create("Math".into(), "2024-01-01".into(), "10:00".into(), teacher.id)
            .await
            .unwrap();
        lectures
            .create("Art".into(), "2024-01-02".into(), "11:00".into(), UserId::new())
            .await
            .unwrap();

        let listed = lectures.list_all_for_students().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].lecture.subject, "Art");
        assert_eq!(listed[0].teacher_name, "Unknown Teacher");
        assert_eq!(listed[1].teacher_name, "Prof. Ito");
    }
}
