use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{ArtifactInfo, DocumentKind, ExportPayload};
use crate::models::bio::{BioDraft, BioField, BioLength};
use crate::render;
use crate::routes::{CreateResponse, GatedRequest};
use crate::sessions::BioSession;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BioSessionView {
    pub draft: BioDraft,
    pub length: BioLength,
}

#[derive(Debug, Deserialize)]
pub struct SetFieldRequest {
    pub field: BioField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SetLengthRequest {
    pub length: BioLength,
}

#[derive(Debug, Serialize)]
pub struct BioPreview {
    pub length: BioLength,
    pub text: String,
}

/// POST /api/v1/bios
pub async fn handle_create(State(state): State<AppState>) -> Json<CreateResponse> {
    let id = state.sessions.bios.create(BioSession::default()).await;
    Json(CreateResponse { id })
}

/// GET /api/v1/bios/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BioSessionView>, AppError> {
    let view = state
        .sessions
        .bios
        .read(id, |s| BioSessionView {
            draft: s.draft.clone(),
            length: s.length,
        })
        .await?;
    Ok(Json(view))
}

/// PATCH /api/v1/bios/:id/fields
pub async fn handle_set_field(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetFieldRequest>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .bios
        .write(id, |s| s.draft.set(req.field, req.value))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/bios/:id/length
pub async fn handle_set_length(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetLengthRequest>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .bios
        .write(id, |s| s.length = req.length)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/bios/:id/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BioPreview>, AppError> {
    let preview = state
        .sessions
        .bios
        .read(id, |s| BioPreview {
            length: s.length,
            text: render::bio::render(&s.draft, s.length),
        })
        .await?;
    Ok(Json(preview))
}

/// POST /api/v1/bios/:id/export — premium, requires a redeemed gate ticket.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<GatedRequest>,
) -> Result<Json<ArtifactInfo>, AppError> {
    state.gate.redeem(req.gate_ticket)?;

    let (title, body) = state
        .sessions
        .bios
        .read(id, |s| (s.draft.name.clone(), render::bio::render(&s.draft, s.length)))
        .await?;

    let artifact = state
        .exporter
        .export(ExportPayload::Text {
            kind: DocumentKind::Bio,
            title,
            body,
        })
        .await?;
    Ok(Json(state.artifacts.insert(artifact)))
}

/// DELETE /api/v1/bios/:id — discard the draft (back navigation).
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.bios.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
