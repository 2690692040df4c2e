//! Contact person within a record

use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// A contact person in a record's contact list.
///
/// One contact may be flagged primary; its channel fields (phone, email,
/// messenger, social) feed the record-level quick-access projection. The
/// model does not force the flag to be exclusive — see the resolver in
/// `roster-core`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub messenger: String,
    pub social: String,
    pub is_primary: bool,
}

impl Contact {
    /// Create an empty contact with a freshly minted id.
    pub fn new() -> Self {
        Self::with_id(EntityId::generate())
    }

    /// Create an empty contact with a known id (e.g. loaded from a store).
    pub fn with_id(id: EntityId) -> Self {
        Self {
            id,
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            messenger: String::new(),
            social: String::new(),
            is_primary: false,
        }
    }

    /// Builder method to set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder method to set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Builder method to flag this contact primary.
    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_contact_is_empty_and_not_primary() {
        let contact = Contact::new();
        assert!(contact.name.is_empty());
        assert!(contact.phone.is_empty());
        assert!(contact.email.is_empty());
        assert!(contact.messenger.is_empty());
        assert!(contact.social.is_empty());
        assert!(!contact.is_primary);
    }

    #[test]
    fn builders_set_fields() {
        let contact = Contact::with_id(1.into())
            .with_name("Somchai")
            .with_phone("0812345678")
            .primary();
        assert_eq!(contact.name, "Somchai");
        assert_eq!(contact.phone, "0812345678");
        assert!(contact.is_primary);
    }
}
