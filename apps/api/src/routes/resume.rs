use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collection::parse_awards;
use crate::errors::AppError;
use crate::export::{ArtifactInfo, DocumentKind, ExportPayload};
use crate::models::resume::{
    ContactField, EducationField, ExperienceField, ProjectField, ResumeDraft, TemplateStyle,
};
use crate::render::resume::{render, ResumePreview};
use crate::routes::{CreateResponse, GatedRequest};
use crate::sessions::ResumeSession;
use crate::state::AppState;
use crate::wizard::{self, WizardStatus};

#[derive(Debug, Serialize)]
pub struct ResumeSessionView {
    pub draft: ResumeDraft,
    pub wizard: WizardStatus,
}

#[derive(Debug, Deserialize)]
pub struct SetContactRequest {
    pub field: ContactField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SetSummaryRequest {
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateExperienceRequest {
    pub field: ExperienceField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEducationRequest {
    pub field: EducationField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub field: ProjectField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct AddSkillRequest {
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub added: bool,
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetAwardsRequest {
    /// One award per line; blank lines are dropped.
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SetTemplateRequest {
    pub template: TemplateStyle,
}

#[derive(Debug, Serialize)]
pub struct AddEntryResponse {
    pub index: usize,
}

/// POST /api/v1/resumes
pub async fn handle_create(State(state): State<AppState>) -> Json<CreateResponse> {
    let id = state.sessions.resumes.create(ResumeSession::default()).await;
    Json(CreateResponse { id })
}

/// GET /api/v1/resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeSessionView>, AppError> {
    let view = state
        .sessions
        .resumes
        .read(id, |s| ResumeSessionView {
            draft: s.draft.clone(),
            wizard: wizard::status(&s.wizard, &s.draft),
        })
        .await?;
    Ok(Json(view))
}

/// PATCH /api/v1/resumes/:id/contact
pub async fn handle_set_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetContactRequest>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .resumes
        .write(id, |s| s.draft.contact.set(req.field, req.value))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/resumes/:id/summary
pub async fn handle_set_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetSummaryRequest>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .resumes
        .write(id, |s| s.draft.summary = req.summary)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Collection editors
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/:id/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AddEntryResponse>, AppError> {
    let index = state
        .sessions
        .resumes
        .write(id, |s| s.draft.experience.add())
        .await?;
    Ok(Json(AddEntryResponse { index }))
}

/// PATCH /api/v1/resumes/:id/experience/:index
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
    Json(req): Json<UpdateExperienceRequest>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .resumes
        .write(id, |s| {
            s.draft.experience.update_at(index, |e| e.set(req.field, req.value))
        })
        .await??;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/resumes/:id/experience/:index
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<StatusCode, AppError> {
    let removed = state
        .sessions
        .resumes
        .write(id, |s| s.draft.experience.remove_at(index))
        .await?;
    if !removed {
        return Err(AppError::UnprocessableEntity(format!(
            "No experience entry at index {index}"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resumes/:id/education
pub async fn handle_add_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AddEntryResponse>, AppError> {
    let index = state
        .sessions
        .resumes
        .write(id, |s| s.draft.education.add())
        .await?;
    Ok(Json(AddEntryResponse { index }))
}

/// PATCH /api/v1/resumes/:id/education/:index
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
    Json(req): Json<UpdateEducationRequest>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .resumes
        .write(id, |s| {
            s.draft.education.update_at(index, |e| e.set(req.field, req.value))
        })
        .await??;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/resumes/:id/education/:index
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<StatusCode, AppError> {
    let removed = state
        .sessions
        .resumes
        .write(id, |s| s.draft.education.remove_at(index))
        .await?;
    if !removed {
        return Err(AppError::UnprocessableEntity(format!(
            "No education entry at index {index}"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resumes/:id/projects
pub async fn handle_add_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AddEntryResponse>, AppError> {
    let index = state
        .sessions
        .resumes
        .write(id, |s| s.draft.projects.add())
        .await?;
    Ok(Json(AddEntryResponse { index }))
}

/// PATCH /api/v1/resumes/:id/projects/:index
pub async fn handle_update_project(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .resumes
        .write(id, |s| {
            s.draft.projects.update_at(index, |p| p.set(req.field, req.value))
        })
        .await??;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/resumes/:id/projects/:index
pub async fn handle_remove_project(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<StatusCode, AppError> {
    let removed = state
        .sessions
        .resumes
        .write(id, |s| s.draft.projects.remove_at(index))
        .await?;
    if !removed {
        return Err(AppError::UnprocessableEntity(format!(
            "No project entry at index {index}"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resumes/:id/skills
///
/// Adding an existing or blank skill is a no-op, reported via `added`.
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddSkillRequest>,
) -> Result<Json<SkillsResponse>, AppError> {
    let response = state
        .sessions
        .resumes
        .write(id, |s| {
            let added = s.draft.skills.add(&req.value);
            SkillsResponse {
                added,
                skills: s.draft.skills.as_slice().to_vec(),
            }
        })
        .await?;
    Ok(Json(response))
}

/// DELETE /api/v1/resumes/:id/skills/:index
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<StatusCode, AppError> {
    let removed = state
        .sessions
        .resumes
        .write(id, |s| s.draft.skills.remove_at(index))
        .await?;
    if !removed {
        return Err(AppError::UnprocessableEntity(format!(
            "No skill at index {index}"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/resumes/:id/awards
pub async fn handle_set_awards(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetAwardsRequest>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .resumes
        .write(id, |s| s.draft.awards = parse_awards(&req.text))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Wizard
// ────────────────────────────────────────────────────────────────────────────

/// PUT /api/v1/resumes/:id/template
pub async fn handle_set_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetTemplateRequest>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .resumes
        .write(id, |s| s.wizard.template = req.template)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/resumes/:id/wizard
pub async fn handle_wizard_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardStatus>, AppError> {
    let status = state
        .sessions
        .resumes
        .read(id, |s| wizard::status(&s.wizard, &s.draft))
        .await?;
    Ok(Json(status))
}

/// POST /api/v1/resumes/:id/wizard/next
///
/// Advances even when the current step is incomplete; completeness is
/// advisory, not a gate.
pub async fn handle_wizard_next(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardStatus>, AppError> {
    let status = state
        .sessions
        .resumes
        .write(id, |s| {
            s.wizard.next();
            wizard::status(&s.wizard, &s.draft)
        })
        .await?;
    Ok(Json(status))
}

/// POST /api/v1/resumes/:id/wizard/previous
pub async fn handle_wizard_previous(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardStatus>, AppError> {
    let status = state
        .sessions
        .resumes
        .write(id, |s| {
            s.wizard.previous();
            wizard::status(&s.wizard, &s.draft)
        })
        .await?;
    Ok(Json(status))
}

// ────────────────────────────────────────────────────────────────────────────
// Preview & export
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resumes/:id/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumePreview>, AppError> {
    let preview = state
        .sessions
        .resumes
        .read(id, |s| render(&s.draft, s.wizard.template))
        .await?;
    Ok(Json(preview))
}

/// POST /api/v1/resumes/:id/export — premium.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<GatedRequest>,
) -> Result<Json<ArtifactInfo>, AppError> {
    state.gate.redeem(req.gate_ticket)?;

    let (title, body) = state
        .sessions
        .resumes
        .read(id, |s| {
            let preview = render(&s.draft, s.wizard.template);
            (s.draft.contact.full_name.clone(), preview.to_text())
        })
        .await?;

    let artifact = state
        .exporter
        .export(ExportPayload::Text {
            kind: DocumentKind::Resume,
            title,
            body,
        })
        .await?;
    Ok(Json(state.artifacts.insert(artifact)))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.resumes.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
