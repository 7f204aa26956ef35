use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{ArtifactInfo, DocumentKind, ExportPayload};
use crate::models::reference::{ReferenceEntry, ReferenceField};
use crate::render::references::{render, ReferenceSheet};
use crate::routes::{CreateResponse, GatedRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReferenceListView {
    pub entries: Vec<ReferenceEntry>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEntryRequest {
    pub field: ReferenceField,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct AddEntryResponse {
    pub index: usize,
}

/// Removal below the one-reference minimum is a no-op, reported here
/// rather than treated as an error.
#[derive(Debug, Serialize)]
pub struct RemoveEntryResponse {
    pub removed: bool,
    pub remaining: usize,
}

/// POST /api/v1/references
pub async fn handle_create(State(state): State<AppState>) -> Json<CreateResponse> {
    let id = state.sessions.create_reference_list().await;
    Json(CreateResponse { id })
}

/// GET /api/v1/references/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReferenceListView>, AppError> {
    let view = state
        .sessions
        .references
        .read(id, |list| ReferenceListView {
            entries: list.entries().to_vec(),
        })
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/references/:id/entries
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AddEntryResponse>, AppError> {
    let index = state.sessions.references.write(id, |list| list.add()).await?;
    Ok(Json(AddEntryResponse { index }))
}

/// PATCH /api/v1/references/:id/entries/:index
pub async fn handle_update_entry(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
    Json(req): Json<UpdateEntryRequest>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .references
        .write(id, |list| {
            list.update_at(index, |entry| entry.set(req.field, req.value))
        })
        .await??;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/references/:id/entries/:index
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<RemoveEntryResponse>, AppError> {
    let response = state
        .sessions
        .references
        .write(id, |list| RemoveEntryResponse {
            removed: list.remove_at(index),
            remaining: list.len(),
        })
        .await?;
    Ok(Json(response))
}

/// GET /api/v1/references/:id/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReferenceSheet>, AppError> {
    let sheet = state.sessions.references.read(id, render).await?;
    Ok(Json(sheet))
}

/// POST /api/v1/references/:id/export — premium.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<GatedRequest>,
) -> Result<Json<ArtifactInfo>, AppError> {
    state.gate.redeem(req.gate_ticket)?;

    let body = state
        .sessions
        .references
        .read(id, |list| render(list).to_text())
        .await?;

    let artifact = state
        .exporter
        .export(ExportPayload::Text {
            kind: DocumentKind::ReferenceSheet,
            title: "Professional References".to_string(),
            body,
        })
        .await?;
    Ok(Json(state.artifacts.insert(artifact)))
}

/// DELETE /api/v1/references/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.references.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
