#![allow(dead_code)]

//! Repeated-entry list management shared by the builders.
//!
//! Every builder list (experience, education, projects, references) follows
//! the same contract: `add` appends a blank entry, `remove_at` is a no-op
//! below the documented minimum, `update_at` edits one entry in place and
//! leaves siblings untouched.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Ordered list of records of a fixed shape with an enforced minimum length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection<T> {
    entries: Vec<T>,
    #[serde(skip)]
    min_len: usize,
}

impl<T: Default> Collection<T> {
    /// A collection seeded with `seed` blank entries that can never shrink
    /// below `min_len`. The builders seed one blank entry so the first form
    /// card is already on screen.
    pub fn seeded(seed: usize, min_len: usize) -> Self {
        let entries = (0..seed.max(min_len)).map(|_| T::default()).collect();
        Collection { entries, min_len }
    }

    /// Appends a blank entry and returns its index.
    pub fn add(&mut self) -> usize {
        self.entries.push(T::default());
        self.entries.len() - 1
    }

    /// Removes the entry at `index`. Returns `false` (leaving the list
    /// unchanged) when the index is out of bounds or removal would violate
    /// the minimum length.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.entries.len() || self.entries.len() <= self.min_len {
            return false;
        }
        self.entries.remove(index);
        true
    }

    /// Applies `f` to the entry at `index`.
    pub fn update_at(&mut self, index: usize, f: impl FnOnce(&mut T)) -> Result<(), AppError> {
        match self.entries.get_mut(index) {
            Some(entry) => {
                f(entry);
                Ok(())
            }
            None => Err(AppError::UnprocessableEntity(format!(
                "No entry at index {index} (list has {} entries)",
                self.entries.len()
            ))),
        }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Skill list: insertion-ordered, unique, whitespace-trimmed.
///
/// `add` is idempotent — re-adding an existing skill (in any whitespace
/// form) is a no-op, as is adding an empty or whitespace-only value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet {
    skills: Vec<String>,
}

impl SkillSet {
    /// Returns `true` if the skill was newly added.
    pub fn add(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() || self.skills.iter().any(|s| s == trimmed) {
            return false;
        }
        self.skills.push(trimmed.to_string());
        true
    }

    /// Removes by index; `false` when out of bounds.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.skills.len() {
            return false;
        }
        self.skills.remove(index);
        true
    }

    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Parses the awards textarea: one award per line, blank lines dropped.
pub fn parse_awards(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
