//! Route definitions for the Smart Attendance HTTP API.
//!
//! Role-grouped routes are mounted under `/api/v1`; the liveness banner
//! and health check sit outside it.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .nest("/auth", auth_routes())
        .nest("/teacher", teacher_routes())
        .nest("/student", student_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .route("/", get(handlers::health::banner))
        .route("/api/health", get(handlers::health::health))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Registration, portal logins, token introspection
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/teacher/login", post(handlers::auth::teacher_login))
        .route("/student/login", post(handlers::auth::student_login))
        .route("/me", get(handlers::auth::me))
}

/// Lecture management and reports.
///
/// `/lectures/{id}` is a teacher id while `/lectures/{id}/attendance` is a
/// lecture id; the router requires one parameter name per segment.
fn teacher_routes() -> Router<AppState> {
    Router::new()
        .route("/lectures", post(handlers::teacher::create_lecture))
        .route("/lectures/{id}", get(handlers::teacher::list_lectures))
        .route(
            "/lectures/{id}/attendance",
            get(handlers::teacher::live_attendance),
        )
        .route(
            "/lecture-report/{lecture_id}",
            get(handlers::teacher::lecture_report),
        )
        .route(
            "/reports/defaulters/{teacher_id}",
            get(handlers::teacher::defaulters),
        )
}

/// Check-in, lecture browsing, history
fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/mark-attendance", post(handlers::student::mark_attendance))
        .route("/lectures", get(handlers::student::list_lectures))
        .route(
            "/attendance/{student_id}",
            get(handlers::student::attendance_history),
        )
}
