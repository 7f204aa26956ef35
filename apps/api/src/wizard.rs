#![allow(dead_code)]

//! The resume builder's step machine.
//!
//! The steps live in an explicit table: id, title, and a completeness
//! predicate over the draft. Completeness is advisory only — `next` never
//! blocks on an incomplete step. That relaxed policy is deliberate; the
//! builder lets users roam and come back.

use serde::{Deserialize, Serialize};

use crate::models::resume::{ResumeDraft, TemplateStyle};

/// One row of the step table.
pub struct StepSpec {
    pub id: &'static str,
    pub title: &'static str,
    /// Advisory completeness check. Never gates navigation.
    pub is_complete: fn(&ResumeDraft) -> bool,
}

/// The fixed, ordered step list for the resume builder.
pub const STEPS: &[StepSpec] = &[
    StepSpec {
        id: "template",
        title: "Template",
        // A template is always selected (Modern by default).
        is_complete: |_| true,
    },
    StepSpec {
        id: "contact",
        title: "Contact",
        is_complete: |d| !d.contact.full_name.is_empty() && !d.contact.email.is_empty(),
    },
    StepSpec {
        id: "summary",
        title: "Summary",
        is_complete: |d| !d.summary.is_empty(),
    },
    StepSpec {
        id: "experience",
        title: "Experience",
        is_complete: |d| d.experience.entries().iter().any(|e| e.has_primary()),
    },
    StepSpec {
        id: "education",
        title: "Education",
        is_complete: |d| d.education.entries().iter().any(|e| e.has_primary()),
    },
    StepSpec {
        id: "skills",
        title: "Skills",
        is_complete: |d| !d.skills.is_empty(),
    },
    StepSpec {
        id: "extras",
        title: "Extras",
        // Projects and awards are optional.
        is_complete: |_| true,
    },
    StepSpec {
        id: "preview",
        title: "Preview",
        is_complete: |_| true,
    },
];

/// Current position in the step table plus the selected template.
/// The index is invariantly within `[0, STEPS.len() - 1]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WizardState {
    step: usize,
    pub template: TemplateStyle,
}

impl WizardState {
    pub fn step(&self) -> usize {
        self.step
    }

    /// Advances one step, clamped to the last.
    pub fn next(&mut self) -> usize {
        self.step = (self.step + 1).min(STEPS.len() - 1);
        self.step
    }

    /// Goes back one step, clamped to 0.
    pub fn previous(&mut self) -> usize {
        self.step = self.step.saturating_sub(1);
        self.step
    }

    /// True on the terminal step, where the full rendered draft is handed
    /// to the export collaborator.
    pub fn at_preview(&self) -> bool {
        self.step == STEPS.len() - 1
    }

    pub fn current_spec(&self) -> &'static StepSpec {
        &STEPS[self.step]
    }
}

/// Per-step status as reported to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepStatus {
    pub id: String,
    pub title: String,
    pub complete: bool,
    pub current: bool,
}

/// The wizard status payload: position, progress, and per-step advisory
/// completeness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardStatus {
    pub step: usize,
    pub step_count: usize,
    pub template: TemplateStyle,
    pub steps: Vec<StepStatus>,
}

pub fn status(state: &WizardState, draft: &ResumeDraft) -> WizardStatus {
    WizardStatus {
        step: state.step(),
        step_count: STEPS.len(),
        template: state.template,
        steps: STEPS
            .iter()
            .enumerate()
            .map(|(i, spec)| StepStatus {
                id: spec.id.to_string(),
                title: spec.title.to_string(),
                complete: (spec.is_complete)(draft),
                current: i == state.step(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ContactField;

    #[test]
    fn test_step_table_has_eight_steps() {
        assert_eq!(STEPS.len(), 8);
        assert_eq!(STEPS[0].id, "template");
        assert_eq!(STEPS[7].id, "preview");
    }

    #[test]
    fn test_initial_state_is_step_zero() {
        let state = WizardState::default();
        assert_eq!(state.step(), 0);
        assert_eq!(state.template, TemplateStyle::Modern);
    }

    #[test]
    fn test_next_clamps_at_last_step() {
        let mut state = WizardState::default();
        for _ in 0..20 {
            state.next();
        }
        assert_eq!(state.step(), STEPS.len() - 1);
        assert!(state.at_preview());
    }

    #[test]
    fn test_previous_clamps_at_zero() {
        let mut state = WizardState::default();
        state.previous();
        state.previous();
        assert_eq!(state.step(), 0);
    }

    #[test]
    fn test_index_stays_in_bounds_under_any_sequence() {
        let mut state = WizardState::default();
        // A jittery walk: forward bursts, back bursts, overshoot both ends.
        for i in 0..200 {
            if i % 3 == 0 {
                state.previous();
            } else {
                state.next();
            }
            assert!(state.step() < STEPS.len());
        }
    }

    #[test]
    fn test_incomplete_step_does_not_block_next() {
        let mut state = WizardState::default();
        let draft = ResumeDraft::default();
        state.next(); // template -> contact
        assert!(!(state.current_spec().is_complete)(&draft), "contact is incomplete");
        assert_eq!(state.next(), 2, "navigation proceeds anyway");
    }

    #[test]
    fn test_contact_completeness_requires_name_and_email() {
        let mut draft = ResumeDraft::default();
        let contact_step = &STEPS[1];
        assert!(!(contact_step.is_complete)(&draft));
        draft.contact.set(ContactField::FullName, "John Doe".to_string());
        assert!(!(contact_step.is_complete)(&draft));
        draft
            .contact
            .set(ContactField::Email, "john@example.com".to_string());
        assert!((contact_step.is_complete)(&draft));
    }

    #[test]
    fn test_status_reports_all_steps_with_current_marker() {
        let mut state = WizardState::default();
        state.next();
        let report = status(&state, &ResumeDraft::default());
        assert_eq!(report.step, 1);
        assert_eq!(report.steps.len(), 8);
        assert!(report.steps[1].current);
        assert!(!report.steps[0].current);
        assert!(report.steps[0].complete, "template step is always complete");
    }
}
