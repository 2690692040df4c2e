//! Pure application of record mutations
//!
//! `apply` is the single entry point the edit session drives. It is total:
//! every mutation yields a record, and one aimed at a missing entity yields
//! the input unchanged.

use roster_domain::{
    Address, BankAccount, Contact, Document, EntityId, Record, RecordDefaults, TaxInvoice,
};

use crate::copy;
use crate::list;
use crate::mutation::{CollectionKey, RecordMutation};
use crate::primary;

/// Apply one mutation, producing the next record value. The returned id is
/// the one minted by an `Add`; every other mutation returns `None`.
pub fn apply(
    record: &Record,
    defaults: &RecordDefaults,
    mutation: &RecordMutation,
) -> (Record, Option<EntityId>) {
    match mutation {
        RecordMutation::Add(key) => add(record, defaults, *key),
        RecordMutation::SetContactField(id, field, value) => {
            let mut next = record.clone();
            next.contacts = list::update_by_id(&record.contacts, id, |c| {
                field.set(c, value.clone());
            });
            (next, None)
        }
        RecordMutation::SetContactPrimary(id, flagged) => {
            let mut next = record.clone();
            next.contacts = list::update_by_id(&record.contacts, id, |c| {
                c.is_primary = *flagged;
            });
            (next, None)
        }
        RecordMutation::SetAddressField(id, field, value) => {
            let mut next = record.clone();
            next.addresses = list::update_by_id(&record.addresses, id, |a| {
                field.set(a, value.clone());
            });
            (next, None)
        }
        RecordMutation::SetAddressDefault(id, flagged) => {
            let mut next = record.clone();
            next.addresses = list::update_by_id(&record.addresses, id, |a| {
                a.is_default = *flagged;
            });
            (next, None)
        }
        RecordMutation::SetTaxInvoiceField(id, field, value) => {
            let mut next = record.clone();
            next.tax_invoices = list::update_by_id(&record.tax_invoices, id, |t| {
                field.set(t, value.clone());
            });
            (next, None)
        }
        RecordMutation::SetBankAccountField(id, field, value) => {
            let mut next = record.clone();
            next.bank_accounts = list::update_by_id(&record.bank_accounts, id, |b| {
                field.set(b, value.clone());
            });
            (next, None)
        }
        RecordMutation::SetBankAccountDefault(id, flagged) => {
            let mut next = record.clone();
            next.bank_accounts = list::update_by_id(&record.bank_accounts, id, |b| {
                b.is_default = *flagged;
            });
            (next, None)
        }
        RecordMutation::SetDocumentField(id, field, value) => {
            let mut next = record.clone();
            next.documents = list::update_by_id(&record.documents, id, |d| {
                field.set(d, value.clone());
            });
            (next, None)
        }
        RecordMutation::SetDocumentFile(id, file) => {
            let mut next = record.clone();
            next.documents = list::update_by_id(&record.documents, id, |d| {
                d.file = Some(file.clone());
            });
            (next, None)
        }
        RecordMutation::Remove(key, id) => {
            let mut next = record.clone();
            match key {
                CollectionKey::Contacts => {
                    next.contacts = list::remove_by_id(&record.contacts, id);
                }
                CollectionKey::Addresses => {
                    next.addresses = list::remove_by_id(&record.addresses, id);
                }
                CollectionKey::TaxInvoices => {
                    next.tax_invoices = list::remove_by_id(&record.tax_invoices, id);
                }
                CollectionKey::BankAccounts => {
                    next.bank_accounts = list::remove_by_id(&record.bank_accounts, id);
                }
                CollectionKey::Documents => {
                    next.documents = list::remove_by_id(&record.documents, id);
                }
            }
            (next, None)
        }
        RecordMutation::CopyAddressIntoTaxInvoice { tax, address } => {
            (copy::apply_address_to_tax(record, tax, address), None)
        }
        RecordMutation::SetChannel(channel, value) => (
            primary::write_channel(record, defaults, *channel, value.clone()),
            None,
        ),
    }
}

/// Append a freshly created sub-entity with its creation defaults and
/// return its minted id.
fn add(record: &Record, defaults: &RecordDefaults, key: CollectionKey) -> (Record, Option<EntityId>) {
    let mut next = record.clone();
    let id = match key {
        CollectionKey::Contacts => {
            let contact = Contact::new();
            let id = contact.id.clone();
            next.contacts = list::append(&record.contacts, contact);
            id
        }
        CollectionKey::Addresses => {
            let address =
                Address::numbered(&defaults.address_label_prefix, record.addresses.len());
            let id = address.id.clone();
            next.addresses = list::append(&record.addresses, address);
            id
        }
        CollectionKey::TaxInvoices => {
            let invoice = TaxInvoice::new();
            let id = invoice.id.clone();
            next.tax_invoices = list::append(&record.tax_invoices, invoice);
            id
        }
        CollectionKey::BankAccounts => {
            let account = BankAccount::new(&defaults.bank_code);
            let id = account.id.clone();
            next.bank_accounts = list::append(&record.bank_accounts, account);
            id
        }
        CollectionKey::Documents => {
            let document = Document::new(&defaults.document_type);
            let id = document.id.clone();
            next.documents = list::append(&record.documents, document);
            id
        }
    };
    (next, Some(id))
}
