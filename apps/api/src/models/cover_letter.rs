use serde::{Deserialize, Serialize};

/// In-progress cover letter. Greeting and closing carry the conventional
/// defaults the form pre-fills; everything else starts empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverLetterDraft {
    pub recipient_name: String,
    pub company_name: String,
    pub position: String,
    pub sender_name: String,
    pub sender_address: String,
    pub sender_email: String,
    pub sender_phone: String,
    pub greeting: String,
    pub opening: String,
    pub body: String,
    pub closing: String,
    pub signature: String,
}

impl Default for CoverLetterDraft {
    fn default() -> Self {
        CoverLetterDraft {
            recipient_name: String::new(),
            company_name: String::new(),
            position: String::new(),
            sender_name: String::new(),
            sender_address: String::new(),
            sender_email: String::new(),
            sender_phone: String::new(),
            greeting: "Dear Hiring Manager,".to_string(),
            opening: String::new(),
            body: String::new(),
            closing: "Sincerely,".to_string(),
            signature: String::new(),
        }
    }
}

/// Field keys for [`CoverLetterDraft::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoverLetterField {
    RecipientName,
    CompanyName,
    Position,
    SenderName,
    SenderAddress,
    SenderEmail,
    SenderPhone,
    Greeting,
    Opening,
    Body,
    Closing,
    Signature,
}

impl CoverLetterDraft {
    pub fn set(&mut self, field: CoverLetterField, value: String) {
        match field {
            CoverLetterField::RecipientName => self.recipient_name = value,
            CoverLetterField::CompanyName => self.company_name = value,
            CoverLetterField::Position => self.position = value,
            CoverLetterField::SenderName => self.sender_name = value,
            CoverLetterField::SenderAddress => self.sender_address = value,
            CoverLetterField::SenderEmail => self.sender_email = value,
            CoverLetterField::SenderPhone => self.sender_phone = value,
            CoverLetterField::Greeting => self.greeting = value,
            CoverLetterField::Opening => self.opening = value,
            CoverLetterField::Body => self.body = value,
            CoverLetterField::Closing => self.closing = value,
            CoverLetterField::Signature => self.signature = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefills_greeting_and_closing() {
        let draft = CoverLetterDraft::default();
        assert_eq!(draft.greeting, "Dear Hiring Manager,");
        assert_eq!(draft.closing, "Sincerely,");
        assert_eq!(draft.opening, "");
    }

    #[test]
    fn test_set_replaces_single_field() {
        let mut draft = CoverLetterDraft::default();
        draft.set(CoverLetterField::CompanyName, "ABC Company".to_string());
        assert_eq!(draft.company_name, "ABC Company");
        assert_eq!(draft.greeting, "Dear Hiring Manager,");
    }

    #[test]
    fn test_closing_may_be_cleared() {
        // The renderer supplies the "Sincerely," fallback; the store allows empty.
        let mut draft = CoverLetterDraft::default();
        draft.set(CoverLetterField::Closing, String::new());
        assert_eq!(draft.closing, "");
    }
}
