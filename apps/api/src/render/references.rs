//! Reference sheet preview: one block per slot, in slot order.
//!
//! A slot renders its details when any of name/title/company is filled;
//! otherwise it renders an explicit fill-in placeholder so the slot (and
//! its position) stays visible.

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::models::reference::ReferenceEntry;

pub const SHEET_TITLE: &str = "Professional References";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReferenceBlock {
    Filled {
        heading: String,
        lines: Vec<String>,
    },
    Placeholder {
        text: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceSheet {
    pub title: String,
    pub blocks: Vec<ReferenceBlock>,
}

/// Renders the sheet. Pure; slot order and count are preserved exactly.
pub fn render(list: &Collection<ReferenceEntry>) -> ReferenceSheet {
    let blocks = list
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| render_slot(i, entry))
        .collect();

    ReferenceSheet {
        title: SHEET_TITLE.to_string(),
        blocks,
    }
}

fn render_slot(index: usize, entry: &ReferenceEntry) -> ReferenceBlock {
    if !entry.has_primary() {
        return ReferenceBlock::Placeholder {
            text: format!("Reference #{} - Fill in details to see preview", index + 1),
        };
    }

    let heading = if entry.name.is_empty() {
        format!("Reference {}", index + 1)
    } else {
        entry.name.clone()
    };

    let mut lines = Vec::new();
    if !entry.title.is_empty() {
        lines.push(entry.title.clone());
    }
    if !entry.company.is_empty() {
        lines.push(entry.company.clone());
    }
    if !entry.email.is_empty() {
        lines.push(format!("Email: {}", entry.email));
    }
    if !entry.phone.is_empty() {
        lines.push(format!("Phone: {}", entry.phone));
    }
    if !entry.relationship.is_empty() {
        lines.push(format!("Relationship: {}", entry.relationship));
    }

    ReferenceBlock::Filled { heading, lines }
}

impl ReferenceSheet {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        for block in &self.blocks {
            out.push('\n');
            match block {
                ReferenceBlock::Filled { heading, lines } => {
                    out.push_str(heading);
                    out.push('\n');
                    for line in lines {
                        out.push_str(line);
                        out.push('\n');
                    }
                }
                ReferenceBlock::Placeholder { text } => {
                    out.push_str(text);
                    out.push('\n');
                }
            }
        }
        out.trim_end().to_string()
    }
}
