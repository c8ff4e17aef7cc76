//! Axum route handlers for the Session API.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::provider::{Credentials, SignupRequest, UserAccount};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub logged_in: bool,
    pub user: Option<UserAccount>,
}

/// GET /api/v1/session
pub async fn handle_get_session(
    State(state): State<AppState>,
) -> Result<Json<SessionResponse>, AppError> {
    Ok(Json(SessionResponse {
        logged_in: state.session.is_logged_in().await?,
        user: state.session.user().await?,
    }))
}

/// POST /api/v1/session/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<SessionResponse>, AppError> {
    let user = state.provider.login(&credentials).await?;
    state.session.set_user(&user).await?;
    state.inactivity.touch();
    Ok(Json(SessionResponse {
        logged_in: true,
        user: Some(user),
    }))
}

/// POST /api/v1/session/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserAccount>), AppError> {
    let user = state.provider.signup(&request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/v1/session/logout
pub async fn handle_logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.session.logout().await?;
    state.inactivity.touch();
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/session/activity
pub async fn handle_activity(State(state): State<AppState>) -> StatusCode {
    state.inactivity.touch();
    StatusCode::NO_CONTENT
}
