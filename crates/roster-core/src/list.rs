//! Generic list editing over identified sub-entities
//!
//! Every operation is a pure, total function producing a new list; an
//! update or remove aimed at a missing id returns the input unchanged.
//! That no-op contract is what keeps list editing resilient to UI races
//! (a remove and an update landing on the same now-deleted entity).

use roster_domain::{Address, BankAccount, Contact, Document, EntityId, TaxInvoice};

/// Implemented by every sub-entity that lives in a record collection.
pub trait ListEntity {
    fn entity_id(&self) -> &EntityId;
}

impl ListEntity for Contact {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}

impl ListEntity for Address {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}

impl ListEntity for TaxInvoice {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}

impl ListEntity for BankAccount {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}

impl ListEntity for Document {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}

/// Append an item, returning the new list. Never fails.
pub fn append<E: ListEntity + Clone>(items: &[E], item: E) -> Vec<E> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// Patch exactly the item whose id matches, leaving every other item
/// untouched. Ids compare by canonical string form, so a text `"3"`
/// addresses a stored numeric `3`. A missing id returns the list unchanged.
pub fn update_by_id<E: ListEntity + Clone>(
    items: &[E],
    id: &EntityId,
    patch: impl FnOnce(&mut E),
) -> Vec<E> {
    let mut next = items.to_vec();
    if let Some(item) = next.iter_mut().find(|e| e.entity_id() == id) {
        patch(item);
    }
    next
}

/// Drop the item whose id matches. A missing id returns the list unchanged.
pub fn remove_by_id<E: ListEntity + Clone>(items: &[E], id: &EntityId) -> Vec<E> {
    items
        .iter()
        .filter(|e| e.entity_id() != id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contacts() -> Vec<Contact> {
        vec![
            Contact::with_id(1.into()).with_name("A"),
            Contact::with_id(2.into()).with_name("B"),
        ]
    }

    #[test]
    fn append_preserves_order() {
        let list = append(&contacts(), Contact::with_id(3.into()).with_name("C"));
        let names: Vec<&str> = list.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn update_patches_only_the_match() {
        let list = update_by_id(&contacts(), &2.into(), |c| c.phone = "02".to_string());
        assert!(list[0].phone.is_empty());
        assert_eq!(list[1].phone, "02");
    }

    #[test]
    fn update_matches_across_representations() {
        let list = update_by_id(&contacts(), &"2".into(), |c| c.phone = "02".to_string());
        assert_eq!(list[1].phone, "02");
    }

    #[test]
    fn update_missing_id_is_a_no_op() {
        let original = contacts();
        let list = update_by_id(&original, &99.into(), |c| c.phone = "x".to_string());
        assert_eq!(list, original);
    }

    #[test]
    fn remove_filters_the_match() {
        let list = remove_by_id(&contacts(), &1.into());
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "B");
    }

    #[test]
    fn remove_missing_id_is_a_no_op() {
        let original = contacts();
        let list = remove_by_id(&original, &"nope".into());
        assert_eq!(list, original);
    }
}
