//! Axum route handlers for the View API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::preferences::theme::ThemePreference;
use crate::state::AppState;
use crate::view::portal::{Notification, ViewSnapshot};
use crate::view::section::Section;

#[derive(Debug, Serialize)]
pub struct ActivationResponse {
    /// False when the id did not name a known section.
    pub activated: bool,
    pub active_section: Option<Section>,
    pub view: ViewSnapshot,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeBody {
    pub mode: ThemePreference,
}

/// GET /api/v1/view
pub async fn handle_get_view(State(state): State<AppState>) -> Json<ViewSnapshot> {
    Json(state.view.lock().await.snapshot())
}

/// POST /api/v1/sections/:section
///
/// Unknown sections are not an error: the view is returned unchanged.
pub async fn handle_activate_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Json<ActivationResponse> {
    let mut view = state.view.lock().await;
    let activated = view.activate_section(&section).is_some();
    state.inactivity.touch();
    Json(ActivationResponse {
        activated,
        active_section: view.active_section(),
        view: view.snapshot(),
    })
}

/// GET /api/v1/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Json<ThemeBody> {
    Json(ThemeBody {
        mode: state.view.lock().await.theme(),
    })
}

/// PUT /api/v1/theme
pub async fn handle_set_theme(
    State(state): State<AppState>,
    Json(body): Json<ThemeBody>,
) -> Result<Json<ThemeBody>, AppError> {
    state
        .view
        .lock()
        .await
        .set_theme(state.preferences.as_ref(), body.mode)
        .await?;
    Ok(Json(body))
}

/// GET /api/v1/notifications
pub async fn handle_drain_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.view.lock().await.drain_notifications())
}
