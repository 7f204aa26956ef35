//! Cover letter layout: sender block, date, recipient block, greeting,
//! optional opening/body paragraphs, fixed thanks sentence, closing,
//! signature.
//!
//! The date is an input, not a clock read — callers pass "today" so the
//! render stays pure.

use chrono::NaiveDate;

use crate::models::cover_letter::CoverLetterDraft;

const SENDER_FALLBACK: &str = "Your Name";
const GREETING_FALLBACK: &str = "Dear Hiring Manager,";
const CLOSING_FALLBACK: &str = "Sincerely,";

/// Renders the full letter as plain text. Empty opening/body paragraphs
/// are omitted entirely — no placeholder text in a letter.
pub fn render(draft: &CoverLetterDraft, today: NaiveDate) -> String {
    let mut blocks: Vec<String> = Vec::new();

    blocks.push(sender_block(draft));
    blocks.push(today.format("%B %-d, %Y").to_string());

    let recipient = recipient_block(draft);
    if !recipient.is_empty() {
        blocks.push(recipient);
    }

    blocks.push(non_empty_or(&draft.greeting, GREETING_FALLBACK));

    if !draft.opening.is_empty() {
        blocks.push(draft.opening.clone());
    }
    if !draft.body.is_empty() {
        blocks.push(draft.body.clone());
    }

    blocks.push(thanks_sentence(draft));
    blocks.push(non_empty_or(&draft.closing, CLOSING_FALLBACK));
    blocks.push(signature_line(draft));

    blocks.join("\n\n")
}

/// The fixed closing-thanks sentence, interpolating the company name or a
/// generic fallback.
pub fn thanks_sentence(draft: &CoverLetterDraft) -> String {
    let company = non_empty_or(&draft.company_name, "your team");
    format!(
        "Thank you for considering my application. I look forward to hearing from you \
         and discussing how I can contribute to {company}."
    )
}

fn sender_block(draft: &CoverLetterDraft) -> String {
    let mut lines = vec![non_empty_or(&draft.sender_name, SENDER_FALLBACK)];
    if !draft.sender_address.is_empty() {
        lines.extend(draft.sender_address.lines().map(str::to_string));
    }
    if !draft.sender_email.is_empty() {
        lines.push(draft.sender_email.clone());
    }
    if !draft.sender_phone.is_empty() {
        lines.push(draft.sender_phone.clone());
    }
    lines.join("\n")
}

fn recipient_block(draft: &CoverLetterDraft) -> String {
    let mut lines = Vec::new();
    if !draft.recipient_name.is_empty() {
        lines.push(draft.recipient_name.clone());
    }
    if !draft.company_name.is_empty() {
        lines.push(draft.company_name.clone());
    }
    lines.join("\n")
}

fn signature_line(draft: &CoverLetterDraft) -> String {
    if !draft.signature.is_empty() {
        draft.signature.clone()
    } else {
        non_empty_or(&draft.sender_name, SENDER_FALLBACK)
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cover_letter::CoverLetterField;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    fn filled_draft() -> CoverLetterDraft {
        let mut draft = CoverLetterDraft::default();
        draft.set(CoverLetterField::SenderName, "John Doe".to_string());
        draft.set(CoverLetterField::SenderEmail, "john.doe@example.com".to_string());
        draft.set(CoverLetterField::CompanyName, "ABC Company".to_string());
        draft.set(CoverLetterField::RecipientName, "Jane Smith".to_string());
        draft.set(CoverLetterField::Opening, "I am writing to express my interest.".to_string());
        draft.set(CoverLetterField::Body, "In my previous role I shipped things.".to_string());
        draft
    }

    #[test]
    fn test_empty_opening_renders_no_opening_paragraph() {
        let mut draft = filled_draft();
        draft.set(CoverLetterField::Opening, String::new());
        let out = render(&draft, today());
        assert!(!out.contains("express my interest"));
        // The greeting is still immediately followed by the body paragraph.
        assert!(out.contains("Dear Hiring Manager,\n\nIn my previous role"));
    }

    #[test]
    fn test_empty_closing_falls_back_to_sincerely() {
        let mut draft = filled_draft();
        draft.set(CoverLetterField::Closing, String::new());
        let out = render(&draft, today());
        assert!(out.contains("Sincerely,"));
    }

    #[test]
    fn test_thanks_sentence_interpolates_company() {
        let out = render(&filled_draft(), today());
        assert!(out.contains("how I can contribute to ABC Company."));
    }

    #[test]
    fn test_thanks_sentence_generic_fallback() {
        let mut draft = filled_draft();
        draft.set(CoverLetterField::CompanyName, String::new());
        let out = render(&draft, today());
        assert!(out.contains("how I can contribute to your team."));
    }

    #[test]
    fn test_date_is_locale_formatted() {
        let out = render(&filled_draft(), today());
        assert!(out.contains("March 5, 2024"), "got: {out}");
    }

    #[test]
    fn test_sender_block_skips_empty_lines() {
        let draft = CoverLetterDraft::default();
        let out = render(&draft, today());
        assert!(out.starts_with("Your Name\n\n"), "got: {out}");
    }

    #[test]
    fn test_multiline_address_is_preserved() {
        let mut draft = filled_draft();
        draft.set(
            CoverLetterField::SenderAddress,
            "123 Main Street\nCity, State 12345".to_string(),
        );
        let out = render(&draft, today());
        assert!(out.contains("123 Main Street\nCity, State 12345"));
    }

    #[test]
    fn test_recipient_block_omitted_when_unknown() {
        let mut draft = filled_draft();
        draft.set(CoverLetterField::RecipientName, String::new());
        draft.set(CoverLetterField::CompanyName, String::new());
        let out = render(&draft, today());
        assert!(out.contains("March 5, 2024\n\nDear Hiring Manager,"), "got: {out}");
    }

    #[test]
    fn test_signature_falls_back_to_sender_name() {
        let out = render(&filled_draft(), today());
        assert!(out.ends_with("John Doe"));
    }

    #[test]
    fn test_render_is_pure() {
        let draft = filled_draft();
        assert_eq!(render(&draft, today()), render(&draft, today()));
    }
}
