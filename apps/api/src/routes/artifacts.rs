use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{ArtifactInfo, ShareOutcome};
use crate::routes::GatedRequest;
use crate::state::AppState;

/// GET /api/v1/artifacts/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ArtifactInfo>, AppError> {
    let artifact = state.artifacts.get(id)?;
    Ok(Json(artifact.info()))
}

/// POST /api/v1/artifacts/:id/share — premium, like the export that
/// produced the artifact.
pub async fn handle_share(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<GatedRequest>,
) -> Result<Json<ShareOutcome>, AppError> {
    state.gate.redeem(req.gate_ticket)?;
    let artifact = state.artifacts.get(id)?;
    let outcome = state.exporter.share(&artifact).await?;
    Ok(Json(outcome))
}
