//! Professional bio generator: three fixed prose templates keyed by length.
//!
//! Required fields fall back to bracketed placeholders so the preview is
//! always renderable; optional fragments are dropped outright.

use crate::models::bio::{BioDraft, BioLength};
use crate::render::join_segments;

const NAME_PLACEHOLDER: &str = "[Your Name]";
const ROLE_PLACEHOLDER: &str = "[Your Current Role]";
const FIRST_NAME_PLACEHOLDER: &str = "[Name]";
const SKILLS_PLACEHOLDER: &str = "[key skills]";
const ACHIEVEMENTS_PLACEHOLDER: &str = "[your achievements]";

/// Renders the bio at the requested length. Pure and deterministic.
pub fn render(draft: &BioDraft, length: BioLength) -> String {
    match length {
        BioLength::Short => render_short(draft),
        BioLength::Medium => render_medium(draft),
        BioLength::Long => render_long(draft),
    }
}

/// The substring of the full name before the first space, or the
/// placeholder when the name is empty.
fn first_name(draft: &BioDraft) -> &str {
    if draft.name.is_empty() {
        FIRST_NAME_PLACEHOLDER
    } else {
        draft.name.split(' ').next().unwrap_or(FIRST_NAME_PLACEHOLDER)
    }
}

fn name_or_placeholder(draft: &BioDraft) -> &str {
    if draft.name.is_empty() {
        NAME_PLACEHOLDER
    } else {
        &draft.name
    }
}

fn skills_or_placeholder(draft: &BioDraft) -> &str {
    if draft.key_skills.is_empty() {
        SKILLS_PLACEHOLDER
    } else {
        &draft.key_skills
    }
}

/// "`{name} is a {role} at {company}.`" with placeholder fallbacks.
/// `role_prefix` lets the long template say "a seasoned"; `at_phrase`
/// lets it say "currently working at".
fn intro_sentence(draft: &BioDraft, role_prefix: &str, at_phrase: &str) -> String {
    let role_part = if draft.current_role.is_empty() {
        ROLE_PLACEHOLDER.to_string()
    } else {
        format!("{role_prefix} {}", draft.current_role)
    };
    let company_part = if draft.company.is_empty() {
        String::new()
    } else {
        format!(" {at_phrase} {}", draft.company)
    };
    format!("{} is {role_part}{company_part}.", name_or_placeholder(draft))
}

fn experience_clause(draft: &BioDraft) -> String {
    if draft.experience.is_empty() {
        String::new()
    } else {
        format!("With {},", draft.experience)
    }
}

fn render_short(draft: &BioDraft) -> String {
    let body = join_segments(&[
        intro_sentence(draft, "a", "at"),
        experience_clause(draft),
        format!(
            "{} specializes in {}.",
            first_name(draft),
            skills_or_placeholder(draft)
        ),
        draft.achievements.clone(),
    ]);
    body.trim().to_string()
}

fn render_medium(draft: &BioDraft) -> String {
    let intro = join_segments(&[
        intro_sentence(draft, "a", "at"),
        experience_clause(draft),
        format!(
            "{} brings expertise in {}.",
            first_name(draft),
            skills_or_placeholder(draft)
        ),
    ]);

    let middle = join_segments(&[draft.achievements.clone(), draft.personal_touch.clone()]);

    let outro = if draft.call_to_action.is_empty() {
        format!(
            "Feel free to connect with {} for professional opportunities and collaborations.",
            first_name(draft)
        )
    } else {
        draft.call_to_action.clone()
    };

    paragraphs(&[intro, middle, outro])
}

fn render_long(draft: &BioDraft) -> String {
    let first = first_name(draft);

    let intro = join_segments(&[
        intro_sentence(draft, "a seasoned", "currently working at"),
        experience_clause(draft),
        format!("{first} has developed deep expertise in {}.", skills_or_placeholder(draft)),
    ]);

    let achievements = if draft.achievements.is_empty() {
        ACHIEVEMENTS_PLACEHOLDER
    } else {
        &draft.achievements
    };
    let career = format!("Throughout {first}'s career, key achievements include: {achievements}.");

    let personal = if draft.personal_touch.is_empty() {
        String::new()
    } else {
        format!("On a personal note, {}", draft.personal_touch)
    };

    let outro = if draft.call_to_action.is_empty() {
        format!(
            "{first} is always interested in connecting with like-minded professionals and \
             exploring new opportunities. Feel free to reach out for collaborations, speaking \
             engagements, or professional discussions."
        )
    } else {
        draft.call_to_action.clone()
    };

    paragraphs(&[intro, career, personal, outro])
}

/// Joins non-empty paragraphs with blank lines and trims the result.
fn paragraphs(parts: &[String]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bio::BioField;

    fn filled_draft() -> BioDraft {
        let mut draft = BioDraft::default();
        draft.set(BioField::Name, "Jane Doe".to_string());
        draft.set(BioField::CurrentRole, "Senior Software Engineer".to_string());
        draft.set(BioField::Company, "Tech Innovations Inc.".to_string());
        draft.set(
            BioField::Experience,
            "over 8 years of experience in software development".to_string(),
        );
        draft.set(
            BioField::KeySkills,
            "full-stack development, team leadership, and cloud architecture".to_string(),
        );
        draft
    }

    #[test]
    fn test_empty_draft_short_bio_contains_placeholders() {
        let out = render(&BioDraft::default(), BioLength::Short);
        assert!(out.contains("[Your Name]"), "missing name placeholder: {out}");
        assert!(
            out.contains("[Your Current Role]"),
            "missing role placeholder: {out}"
        );
        assert!(out.contains("[key skills]"));
    }

    #[test]
    fn test_render_is_pure() {
        let draft = filled_draft();
        let a = render(&draft, BioLength::Medium);
        let b = render(&draft, BioLength::Medium);
        assert_eq!(a, b, "identical inputs must yield identical output");
    }

    #[test]
    fn test_short_bio_uses_first_name() {
        let out = render(&filled_draft(), BioLength::Short);
        assert!(out.contains("Jane specializes in"), "got: {out}");
        assert!(!out.contains("[Name]"));
    }

    #[test]
    fn test_first_name_is_substring_before_first_space() {
        let mut draft = BioDraft::default();
        draft.set(BioField::Name, "Ada Byron Lovelace".to_string());
        assert_eq!(first_name(&draft), "Ada");
    }

    #[test]
    fn test_short_bio_omits_company_when_empty() {
        let mut draft = filled_draft();
        draft.set(BioField::Company, String::new());
        let out = render(&draft, BioLength::Short);
        assert!(!out.contains(" at "), "got: {out}");
    }

    #[test]
    fn test_short_bio_has_no_doubled_spaces() {
        let mut draft = filled_draft();
        draft.set(BioField::Experience, String::new());
        let out = render(&draft, BioLength::Short);
        assert!(!out.contains("  "), "got: {out:?}");
    }

    #[test]
    fn test_medium_bio_default_call_to_action() {
        let out = render(&filled_draft(), BioLength::Medium);
        assert!(
            out.contains("Feel free to connect with Jane for professional opportunities"),
            "got: {out}"
        );
    }

    #[test]
    fn test_medium_bio_custom_call_to_action_wins() {
        let mut draft = filled_draft();
        draft.set(BioField::CallToAction, "Ping me on LinkedIn.".to_string());
        let out = render(&draft, BioLength::Medium);
        assert!(out.ends_with("Ping me on LinkedIn."));
        assert!(!out.contains("Feel free to connect"));
    }

    #[test]
    fn test_long_bio_achievements_placeholder() {
        let out = render(&filled_draft(), BioLength::Long);
        assert!(
            out.contains("key achievements include: [your achievements]."),
            "got: {out}"
        );
    }

    #[test]
    fn test_long_bio_personal_touch_paragraph() {
        let mut draft = filled_draft();
        draft.set(
            BioField::PersonalTouch,
            "when not coding, Jane enjoys hiking and photography".to_string(),
        );
        let out = render(&draft, BioLength::Long);
        assert!(out.contains("On a personal note, when not coding"));
    }

    #[test]
    fn test_long_bio_seasoned_phrasing() {
        let out = render(&filled_draft(), BioLength::Long);
        assert!(out.contains("a seasoned Senior Software Engineer"));
        assert!(out.contains("currently working at Tech Innovations Inc."));
    }

    #[test]
    fn test_output_is_trimmed() {
        let out = render(&BioDraft::default(), BioLength::Medium);
        assert_eq!(out, out.trim());
    }
}
