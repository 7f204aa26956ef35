//! In-memory builder sessions.
//!
//! Every builder mounts as a fresh session keyed by `Uuid`; drafts live
//! only as long as the session (persistence is a non-goal). Each builder
//! type gets its own map so the session payloads stay strongly typed.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::capture::ImageSet;
use crate::collection::Collection;
use crate::errors::AppError;
use crate::models::bio::{BioDraft, BioLength};
use crate::models::cover_letter::CoverLetterDraft;
use crate::models::reference::{new_reference_list, ReferenceEntry};
use crate::models::resume::ResumeDraft;
use crate::wizard::WizardState;

/// A bio builder session: the draft plus the selected length.
#[derive(Debug, Clone, Default)]
pub struct BioSession {
    pub draft: BioDraft,
    pub length: BioLength,
}

/// A resume builder session: the draft plus the wizard position.
#[derive(Debug, Clone, Default)]
pub struct ResumeSession {
    pub draft: ResumeDraft,
    pub wizard: WizardState,
}

/// One `Uuid`-keyed session map.
pub struct SessionMap<T> {
    label: &'static str,
    inner: RwLock<HashMap<Uuid, T>>,
}

impl<T> SessionMap<T> {
    fn new(label: &'static str) -> Self {
        SessionMap {
            label,
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create(&self, value: T) -> Uuid {
        let id = Uuid::new_v4();
        self.inner.write().await.insert(id, value);
        id
    }

    pub async fn read<R>(&self, id: Uuid, f: impl FnOnce(&T) -> R) -> Result<R, AppError> {
        let guard = self.inner.read().await;
        let session = guard
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("{} session {id} not found", self.label)))?;
        Ok(f(session))
    }

    pub async fn write<R>(&self, id: Uuid, f: impl FnOnce(&mut T) -> R) -> Result<R, AppError> {
        let mut guard = self.inner.write().await;
        let session = guard
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("{} session {id} not found", self.label)))?;
        Ok(f(session))
    }

    /// Discards the session (the user navigated back).
    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.inner
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("{} session {id} not found", self.label)))
    }
}

/// All live builder sessions.
pub struct Sessions {
    pub bios: SessionMap<BioSession>,
    pub cover_letters: SessionMap<CoverLetterDraft>,
    pub resumes: SessionMap<ResumeSession>,
    pub references: SessionMap<Collection<ReferenceEntry>>,
    pub scans: SessionMap<ImageSet>,
}

impl Default for Sessions {
    fn default() -> Self {
        Sessions {
            bios: SessionMap::new("bio"),
            cover_letters: SessionMap::new("cover letter"),
            resumes: SessionMap::new("resume"),
            references: SessionMap::new("reference"),
            scans: SessionMap::new("scan"),
        }
    }
}

impl Sessions {
    pub async fn create_reference_list(&self) -> Uuid {
        self.references.create(new_reference_list()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bio::BioField;

    #[tokio::test]
    async fn test_create_then_read() {
        let sessions = Sessions::default();
        let id = sessions.bios.create(BioSession::default()).await;
        let name = sessions.bios.read(id, |s| s.draft.name.clone()).await.unwrap();
        assert_eq!(name, "");
    }

    #[tokio::test]
    async fn test_write_mutates_only_that_session() {
        let sessions = Sessions::default();
        let a = sessions.bios.create(BioSession::default()).await;
        let b = sessions.bios.create(BioSession::default()).await;

        sessions
            .bios
            .write(a, |s| s.draft.set(BioField::Name, "Jane".to_string()))
            .await
            .unwrap();

        assert_eq!(sessions.bios.read(a, |s| s.draft.name.clone()).await.unwrap(), "Jane");
        assert_eq!(sessions.bios.read(b, |s| s.draft.name.clone()).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let sessions = Sessions::default();
        let result = sessions.bios.read(Uuid::new_v4(), |_| ()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_remove_discards_the_draft() {
        let sessions = Sessions::default();
        let id = sessions.bios.create(BioSession::default()).await;
        sessions.bios.remove(id).await.unwrap();
        assert!(sessions.bios.read(id, |_| ()).await.is_err());
    }

    #[tokio::test]
    async fn test_reference_sessions_seed_one_slot() {
        let sessions = Sessions::default();
        let id = sessions.create_reference_list().await;
        let len = sessions.references.read(id, |list| list.len()).await.unwrap();
        assert_eq!(len, 1);
    }
}
