//! Shared application state passed to all handlers via Axum's `State`.

use std::sync::Arc;

use attend_auth::{JwtDecoder, JwtEncoder, PasswordHasher};
use attend_core::config::AppConfig;
use attend_core::error::AppError;
use attend_database::repositories::{
    AttendanceRepository, LectureRepository, ReportRepository, UserRepository,
};
use attend_database::{
    AttendanceStore, DatabasePool, DefaulterStore, LectureStore, MemoryStore, UserStore,
};
use attend_service::{AttendanceRecorder, AuthService, LectureService, QrLinkBuilder, ReportService};

/// The store handles services are built from.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub lectures: Arc<dyn LectureStore>,
    pub attendance: Arc<dyn AttendanceStore>,
    pub defaulters: Arc<dyn DefaulterStore>,
}

impl Stores {
    /// PostgreSQL-backed stores sharing one pool.
    pub fn postgres(db: &DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            lectures: Arc::new(LectureRepository::new(pool.clone())),
            attendance: Arc::new(AttendanceRepository::new(pool.clone())),
            defaulters: Arc::new(ReportRepository::new(pool)),
        }
    }

    /// All four stores backed by one in-memory store.
    pub fn memory(store: MemoryStore) -> Self {
        Self {
            users: Arc::new(store.clone()),
            lectures: Arc::new(store.clone()),
            attendance: Arc::new(store.clone()),
            defaulters: Arc::new(store),
        }
    }
}

/// Shared application state.
///
/// Everything in here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Registration, login and token verification.
    pub auth_service: Arc<AuthService>,
    /// Attendance marking.
    pub attendance_recorder: Arc<AttendanceRecorder>,
    /// Lecture creation and listing.
    pub lecture_service: Arc<LectureService>,
    /// Attendance views and the defaulter report.
    pub report_service: Arc<ReportService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    /// Wires services over the given stores.
    pub fn new(config: AppConfig, stores: Stores) -> Result<Self, AppError> {
        let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let encoder = Arc::new(JwtEncoder::new(&config.auth));
        let decoder = Arc::new(JwtDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&stores.users),
            hasher,
            encoder,
            decoder,
        ));
        let attendance_recorder = Arc::new(AttendanceRecorder::new(Arc::clone(&stores.attendance)));
        let lecture_service = Arc::new(LectureService::new(
            Arc::clone(&stores.lectures),
            QrLinkBuilder::new(&config.frontend),
        ));
        let report_service = Arc::new(ReportService::new(
            Arc::clone(&stores.attendance),
            Arc::clone(&stores.defaulters),
            &config.reports,
        ));

        Ok(Self {
            config: Arc::new(config),
            auth_service,
            attendance_recorder,
            lecture_service,
            report_service,
        })
    }
}
