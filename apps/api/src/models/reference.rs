use serde::{Deserialize, Serialize};

use crate::collection::Collection;

/// One professional reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceEntry {
    pub name: String,
    pub title: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub relationship: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceField {
    Name,
    Title,
    Company,
    Email,
    Phone,
    Relationship,
}

impl ReferenceEntry {
    pub fn set(&mut self, field: ReferenceField, value: String) {
        match field {
            ReferenceField::Name => self.name = value,
            ReferenceField::Title => self.title = value,
            ReferenceField::Company => self.company = value,
            ReferenceField::Email => self.email = value,
            ReferenceField::Phone => self.phone = value,
            ReferenceField::Relationship => self.relationship = value,
        }
    }

    /// A slot renders as a real block only when one of these is filled in.
    pub fn has_primary(&self) -> bool {
        !self.name.is_empty() || !self.title.is_empty() || !self.company.is_empty()
    }
}

/// A reference sheet always shows at least one slot; removal that would
/// empty it is refused by the collection's minimum length.
pub fn new_reference_list() -> Collection<ReferenceEntry> {
    Collection::seeded(1, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_starts_with_one_blank_slot() {
        let list = new_reference_list();
        assert_eq!(list.len(), 1);
        assert!(!list.entries()[0].has_primary());
    }

    #[test]
    fn test_last_reference_cannot_be_removed() {
        let mut list = new_reference_list();
        assert!(!list.remove_at(0));
        assert_eq!(list.len(), 1, "removeAt on a single-entry list is a no-op");
    }

    #[test]
    fn test_removal_allowed_while_more_than_one_remains() {
        let mut list = new_reference_list();
        list.add();
        list.add();
        assert!(list.remove_at(1));
        assert!(list.remove_at(1));
        assert!(!list.remove_at(0));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_email_alone_is_not_primary() {
        let mut entry = ReferenceEntry::default();
        entry.set(ReferenceField::Email, "john.smith@company.com".to_string());
        assert!(!entry.has_primary());
        entry.set(ReferenceField::Company, "ABC Corporation".to_string());
        assert!(entry.has_primary());
    }
}
