//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::{Bytes, BytesMut};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::resume::upload::{FileMeta, UploadState, UploadTicket};
use crate::state::AppState;

/// Multipart field carrying the file.
const RESUME_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
pub struct UploadAccepted {
    pub ticket: UploadTicket,
    pub upload: UploadState,
}

#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    pub removed: bool,
    pub upload: UploadState,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<UploadState> {
    Json(state.view.lock().await.upload_state().clone())
}

/// POST /api/v1/resume
///
/// Validates the file and answers `202 Accepted` while the resume is processed
/// in the background.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadAccepted>), AppError> {
    let rules = state.config.upload_rules();
    let (file, _contents) = read_resume_field(&mut multipart, rules.max_size).await?;

    let (ticket, upload) = {
        let mut view = state.view.lock().await;
        let ticket = view.begin_upload(&file, &rules)?;
        (ticket, view.upload_state().clone())
    };
    state.inactivity.touch();
    info!(file = %file.name, size = file.size, "resume upload accepted");

    tokio::spawn(process_upload(state, ticket, file));

    Ok((StatusCode::ACCEPTED, Json(UploadAccepted { ticket, upload })))
}

/// DELETE /api/v1/resume
pub async fn handle_remove(State(state): State<AppState>) -> Json<RemoveResponse> {
    let mut view = state.view.lock().await;
    let removed = view.remove_resume().is_some();
    Json(RemoveResponse {
        removed,
        upload: view.upload_state().clone(),
    })
}

async fn process_upload(state: AppState, ticket: UploadTicket, file: FileMeta) {
    let result = state.provider.upload_resume(&file).await;
    let mut view = state.view.lock().await;
    match result {
        Ok(record) => {
            view.finish_upload(ticket, record);
        }
        Err(e) => {
            view.fail_upload(ticket, &e.to_string());
        }
    }
}

/// Reads the `resume` field. Stops buffering once the contents pass
/// `max_size`; the returned size then exceeds the ceiling and validation
/// rejects the file with the size message.
async fn read_resume_field(
    multipart: &mut Multipart,
    max_size: u64,
) -> Result<(FileMeta, Bytes), AppError> {
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Uploaded file has no name".to_string()))?;
        let content_type = field.content_type().map(str::to_string);

        let mut contents = BytesMut::new();
        while let Some(chunk) = field.chunk().await? {
            contents.extend_from_slice(&chunk);
            if contents.len() as u64 > max_size {
                debug!(file = %name, "upload exceeds ceiling; not reading further");
                break;
            }
        }
        let meta = FileMeta {
            name,
            content_type,
            size: contents.len() as u64,
        };
        return Ok((meta, contents.freeze()));
    }
    Err(AppError::Validation("No resume file provided".to_string()))
}
