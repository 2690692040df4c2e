//! Primary-item resolution
//!
//! Record-level quick-access fields (a single phone input at the top of a
//! form) are projections over the contact list, not separate storage. Reads
//! go through the primary contact, falling back to the first contact when
//! none is flagged. Writes promote or synthesize a contact as needed.
//!
//! Flagging is NOT exclusive: marking a second item primary/default does
//! not un-flag the first. The resolver stays deterministic by always
//! picking the first flagged item.

use serde::{Deserialize, Serialize};

use roster_domain::{Contact, Record, RecordDefaults};

use crate::mutation::ContactField;

/// Quick-access channel projected from the primary contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactChannel {
    Phone,
    Email,
    Messenger,
    Social,
}

impl ContactChannel {
    /// The contact field this channel projects.
    pub fn field(&self) -> ContactField {
        match self {
            ContactChannel::Phone => ContactField::Phone,
            ContactChannel::Email => ContactField::Email,
            ContactChannel::Messenger => ContactField::Messenger,
            ContactChannel::Social => ContactField::Social,
        }
    }
}

/// The contact feeding the record-level quick-access fields: the first
/// flagged primary, else the first contact, else none.
pub fn primary_contact(record: &Record) -> Option<&Contact> {
    record
        .contacts
        .iter()
        .find(|c| c.is_primary)
        .or_else(|| record.contacts.first())
}

/// Read a projected quick-access field. Empty string when the record has
/// no contacts.
pub fn channel_value<'a>(record: &'a Record, channel: ContactChannel) -> &'a str {
    primary_contact(record)
        .map(|c| channel.field().get(c))
        .unwrap_or("")
}

/// Write a projected quick-access field, producing a new record.
///
/// If a primary contact exists the field is set on it in place. Otherwise
/// the first contact is promoted to primary and receives the field. With no
/// contacts at all, a contact carrying the configured placeholder name is
/// synthesized, flagged primary, and appended — the caller never has to
/// pre-create one.
pub fn write_channel(
    record: &Record,
    defaults: &RecordDefaults,
    channel: ContactChannel,
    value: String,
) -> Record {
    let mut next = record.clone();
    let field = channel.field();
    if let Some(primary) = next.contacts.iter_mut().find(|c| c.is_primary) {
        field.set(primary, value);
    } else if let Some(first) = next.contacts.first_mut() {
        first.is_primary = true;
        field.set(first, value);
    } else {
        let mut contact = Contact::new()
            .with_name(defaults.placeholder_contact_name.clone())
            .primary();
        field.set(&mut contact, value);
        next.contacts.push(contact);
    }
    next
}

/// Implemented by sub-entities carrying an `is_default`-style flag.
pub trait DefaultFlagged {
    fn is_default_item(&self) -> bool;
}

impl DefaultFlagged for Contact {
    fn is_default_item(&self) -> bool {
        self.is_primary
    }
}

impl DefaultFlagged for roster_domain::Address {
    fn is_default_item(&self) -> bool {
        self.is_default
    }
}

impl DefaultFlagged for roster_domain::BankAccount {
    fn is_default_item(&self) -> bool {
        self.is_default
    }
}

/// The designated item of a flagged collection: first flagged, else first.
pub fn default_or_first<T: DefaultFlagged>(items: &[T]) -> Option<&T> {
    items
        .iter()
        .find(|item| item.is_default_item())
        .or_else(|| items.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_domain::RecordKind;

    fn record_with_contacts(contacts: Vec<Contact>) -> Record {
        let mut record = Record::new(RecordKind::Customer);
        record.contacts = contacts;
        record
    }

    #[test]
    fn falls_back_to_first_contact_when_none_flagged() {
        let record = record_with_contacts(vec![
            Contact::with_id(1.into()).with_phone("0001"),
            Contact::with_id(2.into()).with_phone("0002"),
        ]);
        assert_eq!(channel_value(&record, ContactChannel::Phone), "0001");
    }

    #[test]
    fn flagged_contact_wins_over_first() {
        let record = record_with_contacts(vec![
            Contact::with_id(1.into()).with_phone("0001"),
            Contact::with_id(2.into()).with_phone("0002").primary(),
        ]);
        assert_eq!(channel_value(&record, ContactChannel::Phone), "0002");
    }

    #[test]
    fn empty_collection_reads_empty() {
        let record = record_with_contacts(vec![]);
        assert_eq!(channel_value(&record, ContactChannel::Email), "");
    }

    #[test]
    fn write_promotes_first_contact() {
        let record = record_with_contacts(vec![Contact::with_id(1.into())]);
        let next = write_channel(
            &record,
            &RecordDefaults::default(),
            ContactChannel::Phone,
            "0812345678".to_string(),
        );
        assert!(next.contacts[0].is_primary);
        assert_eq!(next.contacts[0].phone, "0812345678");
    }

    #[test]
    fn write_synthesizes_placeholder_contact() {
        let record = record_with_contacts(vec![]);
        let next = write_channel(
            &record,
            &RecordDefaults::default(),
            ContactChannel::Email,
            "a@b.co".to_string(),
        );
        assert_eq!(next.contacts.len(), 1);
        let contact = &next.contacts[0];
        assert_eq!(contact.name, "Contact");
        assert_eq!(contact.email, "a@b.co");
        assert!(contact.is_primary);
    }

    #[test]
    fn write_targets_first_of_multiple_primaries() {
        let record = record_with_contacts(vec![
            Contact::with_id(1.into()).primary(),
            Contact::with_id(2.into()).primary(),
        ]);
        let next = write_channel(
            &record,
            &RecordDefaults::default(),
            ContactChannel::Phone,
            "02".to_string(),
        );
        assert_eq!(next.contacts[0].phone, "02");
        assert!(next.contacts[1].phone.is_empty());
        // Both stay flagged: exclusivity is not enforced.
        assert!(next.contacts[0].is_primary && next.contacts[1].is_primary);
    }

    #[test]
    fn default_or_first_over_bank_accounts() {
        use roster_domain::{BankAccount, EntityId};
        let accounts = vec![
            BankAccount::with_id(1.into()),
            {
                let mut b = BankAccount::with_id(2.into());
                b.is_default = true;
                b
            },
        ];
        assert_eq!(default_or_first(&accounts).unwrap().id, EntityId::from(2));
        assert_eq!(default_or_first(&accounts[..1]).unwrap().id, EntityId::from(1));
    }
}
