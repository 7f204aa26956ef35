pub mod artifacts;
pub mod bio;
pub mod cover_letter;
pub mod gate;
pub mod health;
pub mod references;
pub mod resume;
pub mod scan;

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;

/// Response to every session-create endpoint.
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub id: Uuid,
}

/// Body of every gated (export/share) endpoint: proof of a finished
/// rewarded view.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatedRequest {
    pub gate_ticket: Uuid,
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes + 64 * 1024);

    Router::new()
        .route("/health", get(health::health_handler))
        // Bio builder
        .route("/api/v1/bios", post(bio::handle_create))
        .route(
            "/api/v1/bios/:id",
            get(bio::handle_get).delete(bio::handle_delete),
        )
        .route("/api/v1/bios/:id/fields", patch(bio::handle_set_field))
        .route("/api/v1/bios/:id/length", put(bio::handle_set_length))
        .route("/api/v1/bios/:id/preview", get(bio::handle_preview))
        .route("/api/v1/bios/:id/export", post(bio::handle_export))
        // Cover letter builder
        .route("/api/v1/cover-letters", post(cover_letter::handle_create))
        .route(
            "/api/v1/cover-letters/:id",
            get(cover_letter::handle_get).delete(cover_letter::handle_delete),
        )
        .route(
            "/api/v1/cover-letters/:id/fields",
            patch(cover_letter::handle_set_field),
        )
        .route(
            "/api/v1/cover-letters/:id/preview",
            get(cover_letter::handle_preview),
        )
        .route(
            "/api/v1/cover-letters/:id/export",
            post(cover_letter::handle_export),
        )
        // Resume builder (wizard)
        .route("/api/v1/resumes", post(resume::handle_create))
        .route(
            "/api/v1/resumes/:id",
            get(resume::handle_get).delete(resume::handle_delete),
        )
        .route("/api/v1/resumes/:id/contact", patch(resume::handle_set_contact))
        .route("/api/v1/resumes/:id/summary", put(resume::handle_set_summary))
        .route(
            "/api/v1/resumes/:id/experience",
            post(resume::handle_add_experience),
        )
        .route(
            "/api/v1/resumes/:id/experience/:index",
            patch(resume::handle_update_experience).delete(resume::handle_remove_experience),
        )
        .route(
            "/api/v1/resumes/:id/education",
            post(resume::handle_add_education),
        )
        .route(
            "/api/v1/resumes/:id/education/:index",
            patch(resume::handle_update_education).delete(resume::handle_remove_education),
        )
        .route("/api/v1/resumes/:id/projects", post(resume::handle_add_project))
        .route(
            "/api/v1/resumes/:id/projects/:index",
            patch(resume::handle_update_project).delete(resume::handle_remove_project),
        )
        .route("/api/v1/resumes/:id/skills", post(resume::handle_add_skill))
        .route(
            "/api/v1/resumes/:id/skills/:index",
            delete(resume::handle_remove_skill),
        )
        .route("/api/v1/resumes/:id/awards", put(resume::handle_set_awards))
        .route("/api/v1/resumes/:id/template", put(resume::handle_set_template))
        .route("/api/v1/resumes/:id/wizard", get(resume::handle_wizard_status))
        .route("/api/v1/resumes/:id/wizard/next", post(resume::handle_wizard_next))
        .route(
            "/api/v1/resumes/:id/wizard/previous",
            post(resume::handle_wizard_previous),
        )
        .route("/api/v1/resumes/:id/preview", get(resume::handle_preview))
        .route("/api/v1/resumes/:id/export", post(resume::handle_export))
        // Reference sheet builder
        .route("/api/v1/references", post(references::handle_create))
        .route(
            "/api/v1/references/:id",
            get(references::handle_get).delete(references::handle_delete),
        )
        .route(
            "/api/v1/references/:id/entries",
            post(references::handle_add_entry),
        )
        .route(
            "/api/v1/references/:id/entries/:index",
            patch(references::handle_update_entry).delete(references::handle_remove_entry),
        )
        .route(
            "/api/v1/references/:id/preview",
            get(references::handle_preview),
        )
        .route(
            "/api/v1/references/:id/export",
            post(references::handle_export),
        )
        // Scanner / image-to-PDF
        .route("/api/v1/scans", post(scan::handle_create))
        .route(
            "/api/v1/scans/:id",
            get(scan::handle_get).delete(scan::handle_delete),
        )
        .route("/api/v1/scans/:id/images", post(scan::handle_import))
        .route("/api/v1/scans/:id/capture", post(scan::handle_capture))
        .route(
            "/api/v1/scans/:id/images/:index",
            delete(scan::handle_remove_image),
        )
        .route("/api/v1/scans/:id/convert", post(scan::handle_convert))
        .route("/api/v1/scans/:id/share", post(scan::handle_share))
        // Rewarded-view gate
        .route("/api/v1/gate/views", post(gate::handle_start_view))
        .route("/api/v1/gate/views/:id", get(gate::handle_view_status))
        // Artifacts
        .route("/api/v1/artifacts/:id", get(artifacts::handle_get))
        .route("/api/v1/artifacts/:id/share", post(artifacts::handle_share))
        .layer(body_limit)
        .with_state(state)
}
