//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::listing::JobListing;
use crate::jobs::search::{count_label, SearchQuery};
use crate::provider::{CreatedJob, JobDraft};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub count_label: String,
    pub jobs: Vec<JobListing>,
}

impl From<Vec<JobListing>> for SearchResponse {
    fn from(jobs: Vec<JobListing>) -> Self {
        Self {
            count: jobs.len(),
            count_label: count_label(jobs.len()),
            jobs,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct JobDetailsRequest {
    pub title: String,
    pub company: String,
    pub match_score: u8,
}

#[derive(Debug, Serialize)]
pub struct ModalResponse {
    pub open: bool,
}

/// GET /api/v1/jobs/search
pub async fn handle_search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let jobs = state.view.lock().await.search_jobs(&query);
    state.inactivity.touch();
    Json(jobs.into())
}

/// POST /api/v1/jobs/search/clear
pub async fn handle_clear_search(State(state): State<AppState>) -> Json<SearchResponse> {
    let jobs = state.view.lock().await.clear_job_search();
    Json(jobs.into())
}

/// GET /api/v1/jobs
///
/// Fetches through the provider without touching the page.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let jobs = state.provider.get_jobs(&query).await?;
    Ok(Json(jobs.into()))
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(draft): Json<JobDraft>,
) -> Result<(StatusCode, Json<CreatedJob>), AppError> {
    let job = state.provider.create_job(&draft).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// POST /api/v1/jobs/details
pub async fn handle_open_details(
    State(state): State<AppState>,
    Json(req): Json<JobDetailsRequest>,
) -> Result<Json<ModalResponse>, AppError> {
    if req.match_score > 100 {
        return Err(AppError::Validation(
            "match_score must be between 0 and 100".to_string(),
        ));
    }
    let open = state.view.lock().await.open_job_details(
        &req.title,
        &req.company,
        &format!("{}%", req.match_score),
    );
    Ok(Json(ModalResponse { open }))
}

/// DELETE /api/v1/jobs/details
pub async fn handle_close_details(State(state): State<AppState>) -> Json<ModalResponse> {
    state.view.lock().await.close_job_modal();
    Json(ModalResponse { open: false })
}
