//! Auth handlers: register, portal login, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use attend_entity::user::UserRole;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{LoginResponse, MeResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let input = req.into_input()?;
    state.auth_service.register(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully!")),
    ))
}

/// POST /api/v1/auth/teacher/login
pub async fn teacher_login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    login(&state, req, UserRole::Teacher).await
}

/// POST /api/v1/auth/student/login
pub async fn student_login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    login(&state, req, UserRole::Student).await
}

async fn login(
    state: &AppState,
    req: LoginRequest,
    portal: UserRole,
) -> Result<Json<LoginResponse>, ApiError> {
    let result = state
        .auth_service
        .login(&req.email, &req.password, portal)
        .await?;
    Ok(Json(result.into()))
}

/// GET /api/v1/auth/me
pub async fn me(auth: AuthUser) -> Json<MeResponse> {
    Json(MeResponse::from(&*auth))
}
