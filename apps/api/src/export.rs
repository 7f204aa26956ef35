//! The export collaborator.
//!
//! The core hands a finished draft (rendered text) or an image set to an
//! `Exporter` and gets back an artifact. The shipped `StubExporter` fakes
//! the document body — real PDF serialization is a platform concern and
//! explicitly out of scope — but the artifact bookkeeping (naming, page
//! count, share outcome) is real and what the handlers surface.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::capture::ImageBuffer;
use crate::errors::AppError;

/// Which builder produced the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Bio,
    CoverLetter,
    Resume,
    ReferenceSheet,
    Scan,
}

impl DocumentKind {
    fn slug(self) -> &'static str {
        match self {
            DocumentKind::Bio => "bio",
            DocumentKind::CoverLetter => "cover-letter",
            DocumentKind::Resume => "resume",
            DocumentKind::ReferenceSheet => "references",
            DocumentKind::Scan => "scan",
        }
    }
}

/// What the core hands to the exporter.
pub enum ExportPayload {
    /// A rendered text document.
    Text {
        kind: DocumentKind,
        title: String,
        body: String,
    },
    /// An ordered image set to assemble into a document, one page each.
    Images {
        kind: DocumentKind,
        title: String,
        images: Vec<ImageBuffer>,
    },
}

/// A produced artifact, held in the in-memory artifact table.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub id: Uuid,
    pub kind: DocumentKind,
    pub file_name: String,
    pub media_type: String,
    pub page_count: usize,
    pub created_at: DateTime<Utc>,
    pub data: Bytes,
}

/// Wire-facing artifact metadata (bytes stay server-side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactInfo {
    pub id: Uuid,
    pub kind: DocumentKind,
    pub file_name: String,
    pub media_type: String,
    pub page_count: usize,
    pub size_bytes: usize,
    pub created_at: DateTime<Utc>,
}

impl Artifact {
    pub fn info(&self) -> ArtifactInfo {
        ArtifactInfo {
            id: self.id,
            kind: self.kind,
            file_name: self.file_name.clone(),
            media_type: self.media_type.clone(),
            page_count: self.page_count,
            size_bytes: self.data.len(),
            created_at: self.created_at,
        }
    }
}

/// Result of sharing an artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareOutcome {
    pub artifact_id: Uuid,
    pub channel: String,
    pub message: String,
}

/// The export collaborator seam. Carried in `AppState` as
/// `Arc<dyn Exporter>` so a real PDF backend can replace the stub without
/// touching handlers.
#[async_trait]
pub trait Exporter: Send + Sync {
    async fn export(&self, payload: ExportPayload) -> Result<Artifact, AppError>;

    async fn share(&self, artifact: &Artifact) -> Result<ShareOutcome, AppError>;
}

/// Stub exporter: text documents become `text/plain` artifacts verbatim;
/// image sets become a one-line-per-page `application/pdf` manifest.
pub struct StubExporter;

#[async_trait]
impl Exporter for StubExporter {
    async fn export(&self, payload: ExportPayload) -> Result<Artifact, AppError> {
        let artifact = match payload {
            ExportPayload::Text { kind, title, body } => Artifact {
                id: Uuid::new_v4(),
                kind,
                file_name: format!("{}-{}.txt", kind.slug(), slugify(&title)),
                media_type: "text/plain".to_string(),
                page_count: 1,
                created_at: Utc::now(),
                data: Bytes::from(body),
            },
            ExportPayload::Images {
                kind,
                title,
                images,
            } => {
                if images.is_empty() {
                    return Err(AppError::EmptyInputSet);
                }
                let manifest = images
                    .iter()
                    .enumerate()
                    .map(|(i, img)| {
                        format!("page {}: {} ({}, {} bytes)", i + 1, img.file_name, img.media_type, img.data.len())
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                Artifact {
                    id: Uuid::new_v4(),
                    kind,
                    file_name: format!("{}-{}.pdf", kind.slug(), slugify(&title)),
                    media_type: "application/pdf".to_string(),
                    page_count: images.len(),
                    created_at: Utc::now(),
                    data: Bytes::from(manifest),
                }
            }
        };

        info!(
            "Exported {} as {} ({} page(s))",
            artifact.kind.slug(),
            artifact.file_name,
            artifact.page_count
        );
        Ok(artifact)
    }

    async fn share(&self, artifact: &Artifact) -> Result<ShareOutcome, AppError> {
        info!("Opening share sheet for {}", artifact.file_name);
        Ok(ShareOutcome {
            artifact_id: artifact.id,
            channel: "share-sheet".to_string(),
            message: format!("Sharing options opened for {}", artifact.file_name),
        })
    }
}

/// In-memory artifact table. Artifacts live until the process exits.
#[derive(Default)]
pub struct ArtifactStore {
    artifacts: Mutex<HashMap<Uuid, Artifact>>,
}

impl ArtifactStore {
    pub fn insert(&self, artifact: Artifact) -> ArtifactInfo {
        let info = artifact.info();
        self.artifacts
            .lock()
            .expect("artifact mutex poisoned")
            .insert(artifact.id, artifact);
        info
    }

    pub fn get(&self, id: Uuid) -> Result<Artifact, AppError> {
        self.artifacts
            .lock()
            .expect("artifact mutex poisoned")
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Artifact {id} not found")))
    }
}

fn slugify(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "untitled".to_string()
    } else {
        // Collapse runs of '-' left by punctuation.
        let mut out = String::with_capacity(trimmed.len());
        let mut prev_dash = false;
        for c in trimmed.chars() {
            if c == '-' {
                if !prev_dash {
                    out.push(c);
                }
                prev_dash = true;
            } else {
                out.push(c);
                prev_dash = false;
            }
        }
        out
    }
}
