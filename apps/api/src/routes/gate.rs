use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::gate::{ViewStatus, ViewTicket};
use crate::state::AppState;

/// POST /api/v1/gate/views — starts a rewarded view.
pub async fn handle_start_view(State(state): State<AppState>) -> Json<ViewTicket> {
    Json(state.gate.start_view())
}

/// GET /api/v1/gate/views/:id — countdown progress, non-consuming.
/// The ticket itself is redeemed by the premium endpoint it unlocks.
pub async fn handle_view_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ViewStatus>, AppError> {
    Ok(Json(state.gate.status(id)?))
}
