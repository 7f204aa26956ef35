use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{ArtifactInfo, DocumentKind, ExportPayload};
use crate::models::cover_letter::{CoverLetterDraft, CoverLetterField};
use crate::render;
use crate::routes::{CreateResponse, GatedRequest};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetFieldRequest {
    pub field: CoverLetterField,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct LetterPreview {
    pub text: String,
}

/// POST /api/v1/cover-letters
pub async fn handle_create(State(state): State<AppState>) -> Json<CreateResponse> {
    let id = state
        .sessions
        .cover_letters
        .create(CoverLetterDraft::default())
        .await;
    Json(CreateResponse { id })
}

/// GET /api/v1/cover-letters/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CoverLetterDraft>, AppError> {
    let draft = state.sessions.cover_letters.read(id, |d| d.clone()).await?;
    Ok(Json(draft))
}

/// PATCH /api/v1/cover-letters/:id/fields
pub async fn handle_set_field(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetFieldRequest>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .cover_letters
        .write(id, |d| d.set(req.field, req.value))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/cover-letters/:id/preview
///
/// The letter is dated with today's date at render time; the render itself
/// stays pure.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LetterPreview>, AppError> {
    let today = Utc::now().date_naive();
    let text = state
        .sessions
        .cover_letters
        .read(id, |d| render::cover_letter::render(d, today))
        .await?;
    Ok(Json(LetterPreview { text }))
}

/// POST /api/v1/cover-letters/:id/export — premium.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<GatedRequest>,
) -> Result<Json<ArtifactInfo>, AppError> {
    state.gate.redeem(req.gate_ticket)?;

    let today = Utc::now().date_naive();
    let (title, body) = state
        .sessions
        .cover_letters
        .read(id, |d| {
            (d.sender_name.clone(), render::cover_letter::render(d, today))
        })
        .await?;

    let artifact = state
        .exporter
        .export(ExportPayload::Text {
            kind: DocumentKind::CoverLetter,
            title,
            body,
        })
        .await?;
    Ok(Json(state.artifacts.insert(artifact)))
}

/// DELETE /api/v1/cover-letters/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.cover_letters.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
