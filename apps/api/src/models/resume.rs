use serde::{Deserialize, Serialize};

use crate::collection::{Collection, SkillSet};

/// Contact header of the resume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    FullName,
    Email,
    Phone,
    Location,
}

impl Contact {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::FullName => self.full_name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Location => self.location = value,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Company,
    Position,
    Duration,
    Description,
}

impl ExperienceEntry {
    pub fn set(&mut self, field: ExperienceField, value: String) {
        match field {
            ExperienceField::Company => self.company = value,
            ExperienceField::Position => self.position = value,
            ExperienceField::Duration => self.duration = value,
            ExperienceField::Description => self.description = value,
        }
    }

    /// An entry renders only when a primary field is filled in.
    pub fn has_primary(&self) -> bool {
        !self.company.is_empty() || !self.position.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Institution,
    Degree,
    Year,
}

impl EducationEntry {
    pub fn set(&mut self, field: EducationField, value: String) {
        match field {
            EducationField::Institution => self.institution = value,
            EducationField::Degree => self.degree = value,
            EducationField::Year => self.year = value,
        }
    }

    pub fn has_primary(&self) -> bool {
        !self.institution.is_empty() || !self.degree.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectField {
    Title,
    Description,
}

impl ProjectEntry {
    pub fn set(&mut self, field: ProjectField, value: String) {
        match field {
            ProjectField::Title => self.title = value,
            ProjectField::Description => self.description = value,
        }
    }

    pub fn has_primary(&self) -> bool {
        !self.title.is_empty()
    }
}

/// Visual template for the resume preview. Fixed set, matching the
/// template selector cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStyle {
    #[default]
    Modern,
    Classic,
    Minimal,
    Creative,
    Executive,
}

/// The full in-progress resume. Experience, education and projects are
/// seeded with one blank entry so the first card is already on screen;
/// they may be emptied, unlike references.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDraft {
    pub contact: Contact,
    pub summary: String,
    pub experience: Collection<ExperienceEntry>,
    pub education: Collection<EducationEntry>,
    pub skills: SkillSet,
    pub projects: Collection<ProjectEntry>,
    pub awards: Vec<String>,
}

impl Default for ResumeDraft {
    fn default() -> Self {
        ResumeDraft {
            contact: Contact::default(),
            summary: String::new(),
            experience: Collection::seeded(1, 0),
            education: Collection::seeded(1, 0),
            skills: SkillSet::default(),
            projects: Collection::seeded(1, 0),
            awards: Vec::new(),
        }
    }
}
