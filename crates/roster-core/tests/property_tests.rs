//! Property-based tests for the mutation engine

use proptest::prelude::*;

use roster_core::{apply::apply, CollectionKey, ContactField, RecordMutation};
use roster_domain::{Contact, EntityId, Record, RecordDefaults, RecordKind};

/// Records with up to five contacts carrying small numeric ids.
fn record_strategy() -> impl Strategy<Value = Record> {
    (0usize..=5).prop_map(|n| {
        let mut record = Record::new(RecordKind::Customer);
        for i in 0..n {
            record
                .contacts
                .push(Contact::with_id((i as i64).into()).with_name(format!("c{i}")));
        }
        record
    })
}

/// Ids guaranteed absent from `record_strategy` records, in both
/// representations.
fn absent_id_strategy() -> impl Strategy<Value = EntityId> {
    prop_oneof![
        (100i64..10_000).prop_map(EntityId::from),
        "[a-z][a-z0-9]{0,8}".prop_map(EntityId::from),
    ]
}

proptest! {
    #[test]
    fn update_with_absent_id_is_identity(
        record in record_strategy(),
        id in absent_id_strategy(),
        value in ".{0,20}",
    ) {
        let (next, _) = apply(
            &record,
            &RecordDefaults::default(),
            &RecordMutation::SetContactField(id, ContactField::Phone, value),
        );
        prop_assert_eq!(next, record);
    }

    #[test]
    fn remove_with_absent_id_is_identity(
        record in record_strategy(),
        id in absent_id_strategy(),
    ) {
        let (next, _) = apply(
            &record,
            &RecordDefaults::default(),
            &RecordMutation::Remove(CollectionKey::Contacts, id),
        );
        prop_assert_eq!(next, record);
    }

    #[test]
    fn add_then_remove_is_identity(record in record_strategy()) {
        let defaults = RecordDefaults::default();
        let (added, id) = apply(&record, &defaults, &RecordMutation::Add(CollectionKey::Contacts));
        let (restored, _) = apply(
            &added,
            &defaults,
            &RecordMutation::Remove(CollectionKey::Contacts, id.unwrap()),
        );
        prop_assert_eq!(restored, record);
    }

    #[test]
    fn numeric_and_text_forms_address_the_same_entity(
        record in record_strategy(),
        value in "[0-9]{1,10}",
    ) {
        prop_assume!(!record.contacts.is_empty());
        let target = record.contacts[0].id.clone();
        let as_text = EntityId::from(target.canonical().into_owned());

        let defaults = RecordDefaults::default();
        let (via_original, _) = apply(
            &record,
            &defaults,
            &RecordMutation::SetContactField(target, ContactField::Phone, value.clone()),
        );
        let (via_text, _) = apply(
            &record,
            &defaults,
            &RecordMutation::SetContactField(as_text, ContactField::Phone, value),
        );
        prop_assert_eq!(via_original, via_text);
    }
}
