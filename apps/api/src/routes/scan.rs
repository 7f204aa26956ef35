use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::capture::{ImageBuffer, ImageInfo, ImageSet, StreamConstraints};
use crate::errors::AppError;
use crate::export::{ArtifactInfo, DocumentKind, ExportPayload, ShareOutcome};
use crate::routes::{CreateResponse, GatedRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScanView {
    pub images: Vec<ImageInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptureRequest {
    pub constraints: Option<StreamConstraints>,
}

/// POST /api/v1/scans
pub async fn handle_create(State(state): State<AppState>) -> Json<CreateResponse> {
    let id = state.sessions.scans.create(ImageSet::default()).await;
    Json(CreateResponse { id })
}

/// GET /api/v1/scans/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScanView>, AppError> {
    let view = state
        .sessions
        .scans
        .read(id, |set| ScanView { images: set.infos() })
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/scans/:id/images — multipart file import.
///
/// Non-image parts fail the whole request with `UnsupportedFileType`
/// before anything is appended; oversized parts fail validation the same
/// way. Accepted images land in the set in arrival order.
pub async fn handle_import(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ScanView>, AppError> {
    // Session existence check up front so a bad id fails fast.
    state.sessions.scans.read(id, |_| ()).await?;

    let mut accepted: Vec<ImageBuffer> = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let media_type = field.content_type().unwrap_or("unknown").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed reading upload '{file_name}': {e}")))?;

        if data.len() > state.config.max_upload_bytes {
            return Err(AppError::Validation(format!(
                "'{file_name}' exceeds the {} byte upload limit",
                state.config.max_upload_bytes
            )));
        }

        accepted.push(ImageBuffer::from_upload(file_name, media_type, data)?);
    }

    if accepted.is_empty() {
        return Err(AppError::Validation("No files in upload".to_string()));
    }

    let count = accepted.len();
    let view = state
        .sessions
        .scans
        .write(id, |set| {
            for image in accepted {
                set.push(image);
            }
            ScanView { images: set.infos() }
        })
        .await?;

    info!("Imported {count} image(s) into scan {id}");
    Ok(Json(view))
}

/// POST /api/v1/scans/:id/capture — one frame from the camera collaborator.
///
/// Opens a stream, grabs a frame, and drops the stream (closing is
/// dropping; there is no retry policy). Camera errors surface as
/// `PermissionDenied` / `DeviceUnavailable`.
pub async fn handle_capture(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CaptureRequest>,
) -> Result<Json<ScanView>, AppError> {
    state.sessions.scans.read(id, |_| ()).await?;

    let constraints = req.constraints.unwrap_or_default();
    let stream = state.camera.open_stream(constraints).await?;
    let frame = state.camera.capture_frame(&stream).await?;
    drop(stream);

    let view = state
        .sessions
        .scans
        .write(id, |set| {
            set.push(frame);
            ScanView { images: set.infos() }
        })
        .await?;
    Ok(Json(view))
}

/// DELETE /api/v1/scans/:id/images/:index
pub async fn handle_remove_image(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<StatusCode, AppError> {
    let removed = state
        .sessions
        .scans
        .write(id, |set| set.remove_at(index))
        .await?;
    if !removed {
        return Err(AppError::UnprocessableEntity(format!(
            "No image at index {index}"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/scans/:id/convert — premium. Assembles the set into a
/// document artifact, one page per image. Empty sets fail with
/// `EmptyInputSet`.
pub async fn handle_convert(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<GatedRequest>,
) -> Result<Json<ArtifactInfo>, AppError> {
    state.gate.redeem(req.gate_ticket)?;

    let images = state
        .sessions
        .scans
        .read(id, |set| set.images().to_vec())
        .await?;

    let artifact = state
        .exporter
        .export(ExportPayload::Images {
            kind: DocumentKind::Scan,
            title: "Scanned Document".to_string(),
            images,
        })
        .await?;
    Ok(Json(state.artifacts.insert(artifact)))
}

/// POST /api/v1/scans/:id/share — premium. Converts then opens the share
/// sheet for the produced artifact.
pub async fn handle_share(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<GatedRequest>,
) -> Result<Json<ShareOutcome>, AppError> {
    state.gate.redeem(req.gate_ticket)?;

    let images = state
        .sessions
        .scans
        .read(id, |set| set.images().to_vec())
        .await?;
    if images.is_empty() {
        return Err(AppError::EmptyInputSet);
    }

    let artifact = state
        .exporter
        .export(ExportPayload::Images {
            kind: DocumentKind::Scan,
            title: "Scanned Document".to_string(),
            images,
        })
        .await?;
    let outcome = state.exporter.share(&artifact).await?;
    state.artifacts.insert(artifact);
    Ok(Json(outcome))
}

/// DELETE /api/v1/scans/:id — closing the scanner view discards the set.
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.scans.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
