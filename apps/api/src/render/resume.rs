#![allow(dead_code)]

//! Resume preview: conditional sections over the draft's lists.
//!
//! A section is omitted entirely when its list is empty or every entry
//! lacks a primary field. Within a shown section, blank secondary fields
//! render as nothing — placeholders are for required fields only.

use serde::{Deserialize, Serialize};

use crate::models::resume::{ResumeDraft, TemplateStyle};

pub const HEADING_SUMMARY: &str = "Professional Summary";
pub const HEADING_EXPERIENCE: &str = "Experience";
pub const HEADING_EDUCATION: &str = "Education";
pub const HEADING_SKILLS: &str = "Skills";
pub const HEADING_PROJECTS: &str = "Projects";
pub const HEADING_AWARDS: &str = "Awards & Achievements";

/// One item inside a section. `title` is the bold line; the rest are
/// optional and render as empty when blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionItem {
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub subtitle: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub meta: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub items: Vec<SectionItem>,
}

/// The rendered resume. Serialized as-is to the preview endpoint and
/// flattened by [`ResumePreview::to_text`] for the stub exporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumePreview {
    pub template: TemplateStyle,
    pub name: String,
    pub contact_lines: Vec<String>,
    pub sections: Vec<Section>,
}

/// Renders the draft against the selected template style. Pure; never errors.
pub fn render(draft: &ResumeDraft, template: TemplateStyle) -> ResumePreview {
    let name = if draft.contact.full_name.is_empty() {
        "Your Name".to_string()
    } else {
        draft.contact.full_name.clone()
    };

    let contact_lines = [
        &draft.contact.email,
        &draft.contact.phone,
        &draft.contact.location,
    ]
    .into_iter()
    .filter(|line| !line.is_empty())
    .cloned()
    .collect();

    let mut sections = Vec::new();

    if !draft.summary.is_empty() {
        sections.push(Section {
            heading: HEADING_SUMMARY.to_string(),
            items: vec![SectionItem {
                detail: draft.summary.clone(),
                ..Default::default()
            }],
        });
    }

    let experience_items: Vec<SectionItem> = draft
        .experience
        .entries()
        .iter()
        .filter(|e| e.has_primary())
        .map(|e| SectionItem {
            title: if e.position.is_empty() {
                "Position".to_string()
            } else {
                e.position.clone()
            },
            subtitle: e.company.clone(),
            meta: e.duration.clone(),
            detail: e.description.clone(),
        })
        .collect();
    if !experience_items.is_empty() {
        sections.push(Section {
            heading: HEADING_EXPERIENCE.to_string(),
            items: experience_items,
        });
    }

    let education_items: Vec<SectionItem> = draft
        .education
        .entries()
        .iter()
        .filter(|e| e.has_primary())
        .map(|e| SectionItem {
            title: if e.degree.is_empty() {
                "Degree".to_string()
            } else {
                e.degree.clone()
            },
            subtitle: e.institution.clone(),
            meta: e.year.clone(),
            ..Default::default()
        })
        .collect();
    if !education_items.is_empty() {
        sections.push(Section {
            heading: HEADING_EDUCATION.to_string(),
            items: education_items,
        });
    }

    if !draft.skills.is_empty() {
        sections.push(Section {
            heading: HEADING_SKILLS.to_string(),
            items: draft
                .skills
                .as_slice()
                .iter()
                .map(|skill| SectionItem {
                    title: skill.clone(),
                    ..Default::default()
                })
                .collect(),
        });
    }

    let project_items: Vec<SectionItem> = draft
        .projects
        .entries()
        .iter()
        .filter(|p| p.has_primary())
        .map(|p| SectionItem {
            title: p.title.clone(),
            detail: p.description.clone(),
            ..Default::default()
        })
        .collect();
    if !project_items.is_empty() {
        sections.push(Section {
            heading: HEADING_PROJECTS.to_string(),
            items: project_items,
        });
    }

    if !draft.awards.is_empty() {
        sections.push(Section {
            heading: HEADING_AWARDS.to_string(),
            items: draft
                .awards
                .iter()
                .map(|award| SectionItem {
                    title: award.clone(),
                    ..Default::default()
                })
                .collect(),
        });
    }

    ResumePreview {
        template,
        name,
        contact_lines,
        sections,
    }
}

impl ResumePreview {
    pub fn section(&self, heading: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.heading == heading)
    }

    /// Plain-text flattening for the export collaborator.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.name);
        out.push('\n');
        for line in &self.contact_lines {
            out.push_str(line);
            out.push('\n');
        }
        for section in &self.sections {
            out.push('\n');
            out.push_str(&section.heading);
            out.push('\n');
            for item in &section.items {
                for part in [&item.title, &item.subtitle, &item.meta, &item.detail] {
                    if !part.is_empty() {
                        out.push_str(part);
                        out.push('\n');
                    }
                }
            }
        }
        out.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ContactField, EducationField, ExperienceField, ProjectField};

    #[test]
    fn test_empty_draft_renders_only_the_name_fallback() {
        let preview = render(&ResumeDraft::default(), TemplateStyle::Modern);
        assert_eq!(preview.name, "Your Name");
        assert!(preview.contact_lines.is_empty());
        assert!(preview.sections.is_empty(), "blank seeded entries must not render");
    }

    #[test]
    fn test_education_shown_experience_omitted() {
        let mut draft = ResumeDraft::default();
        draft
            .education
            .update_at(0, |e| {
                e.set(EducationField::Institution, "MIT".to_string());
                e.set(EducationField::Degree, "BS".to_string());
                e.set(EducationField::Year, "2020".to_string());
            })
            .unwrap();

        let preview = render(&draft, TemplateStyle::Modern);
        assert!(preview.section(HEADING_EDUCATION).is_some());
        assert!(
            preview.section(HEADING_EXPERIENCE).is_none(),
            "experience with only a blank seeded entry must be omitted"
        );

        let text = preview.to_text();
        assert!(text.contains("Education"));
        assert!(!text.contains("Experience"));
    }

    #[test]
    fn test_secondary_fields_render_empty_not_placeholder() {
        let mut draft = ResumeDraft::default();
        draft
            .experience
            .update_at(0, |e| e.set(ExperienceField::Company, "Acme".to_string()))
            .unwrap();

        let preview = render(&draft, TemplateStyle::Modern);
        let section = preview.section(HEADING_EXPERIENCE).unwrap();
        assert_eq!(section.items[0].subtitle, "Acme");
        assert_eq!(section.items[0].meta, "", "blank duration stays blank");
        // Position is the item title and gets the in-layout fallback.
        assert_eq!(section.items[0].title, "Position");
    }

    #[test]
    fn test_summary_section_conditional() {
        let mut draft = ResumeDraft::default();
        let preview = render(&draft, TemplateStyle::Modern);
        assert!(preview.section(HEADING_SUMMARY).is_none());

        draft.summary = "Experienced professional with 5+ years.".to_string();
        let preview = render(&draft, TemplateStyle::Modern);
        assert_eq!(
            preview.section(HEADING_SUMMARY).unwrap().items[0].detail,
            "Experienced professional with 5+ years."
        );
    }

    #[test]
    fn test_skills_and_awards_sections() {
        let mut draft = ResumeDraft::default();
        draft.skills.add("Rust");
        draft.skills.add("SQL");
        draft.awards = vec!["Employee of the Month - June 2023".to_string()];

        let preview = render(&draft, TemplateStyle::Minimal);
        let skills = preview.section(HEADING_SKILLS).unwrap();
        assert_eq!(skills.items.len(), 2);
        assert_eq!(skills.items[0].title, "Rust");
        assert!(preview.section(HEADING_AWARDS).is_some());
    }

    #[test]
    fn test_projects_need_a_title() {
        let mut draft = ResumeDraft::default();
        draft
            .projects
            .update_at(0, |p| p.set(ProjectField::Description, "no title".to_string()))
            .unwrap();
        let preview = render(&draft, TemplateStyle::Modern);
        assert!(
            preview.section(HEADING_PROJECTS).is_none(),
            "description without a title must not create a Projects section"
        );
    }

    #[test]
    fn test_contact_lines_skip_blanks() {
        let mut draft = ResumeDraft::default();
        draft.contact.set(ContactField::FullName, "John Doe".to_string());
        draft.contact.set(ContactField::Location, "City, State".to_string());
        let preview = render(&draft, TemplateStyle::Classic);
        assert_eq!(preview.name, "John Doe");
        assert_eq!(preview.contact_lines, ["City, State"]);
    }

    #[test]
    fn test_template_style_is_carried_through() {
        let preview = render(&ResumeDraft::default(), TemplateStyle::Creative);
        assert_eq!(preview.template, TemplateStyle::Creative);
    }
}
