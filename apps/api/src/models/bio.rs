use serde::{Deserialize, Serialize};

/// In-progress professional bio. Every field starts empty — the renderer
/// substitutes placeholders, so no field is ever `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BioDraft {
    pub name: String,
    pub current_role: String,
    pub company: String,
    pub experience: String,
    pub key_skills: String,
    pub achievements: String,
    pub personal_touch: String,
    pub call_to_action: String,
}

/// Field keys for [`BioDraft::set`]. Wire names match the builder form ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BioField {
    Name,
    CurrentRole,
    Company,
    Experience,
    KeySkills,
    Achievements,
    PersonalTouch,
    CallToAction,
}

/// Target length for the generated bio prose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BioLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl BioDraft {
    /// Replaces exactly one field, leaving siblings untouched.
    /// No validation: empty or odd values render as placeholders downstream.
    pub fn set(&mut self, field: BioField, value: String) {
        match field {
            BioField::Name => self.name = value,
            BioField::CurrentRole => self.current_role = value,
            BioField::Company => self.company = value,
            BioField::Experience => self.experience = value,
            BioField::KeySkills => self.key_skills = value,
            BioField::Achievements => self.achievements = value,
            BioField::PersonalTouch => self.personal_touch = value,
            BioField::CallToAction => self.call_to_action = value,
        }
    }
}
