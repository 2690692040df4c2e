//! Events describing applied mutations

use serde::{Deserialize, Serialize};

use roster_domain::EntityId;

use crate::mutation::{CollectionKey, RecordMutation};
use crate::primary::ContactChannel;

/// What an applied mutation did, for sinks and logs.
///
/// Events describe the mutation as issued, not its effect: an update aimed
/// at a removed entity still reports `Updated` even though the record came
/// back unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RecordEvent {
    Added {
        collection: CollectionKey,
        id: EntityId,
    },
    Updated {
        collection: CollectionKey,
        id: EntityId,
    },
    Removed {
        collection: CollectionKey,
        id: EntityId,
    },
    ChannelWritten {
        channel: ContactChannel,
    },
    AddressCopied {
        tax: EntityId,
        address: EntityId,
    },
}

impl RecordEvent {
    /// Describe a mutation that has just been applied. `added` is the id
    /// minted when the mutation was an `Add`.
    pub fn describe(mutation: &RecordMutation, added: Option<&EntityId>) -> Self {
        use RecordMutation::*;
        match mutation {
            Add(collection) => RecordEvent::Added {
                collection: *collection,
                id: added.cloned().unwrap_or_else(|| EntityId::from("")),
            },
            SetContactField(id, _, _) | SetContactPrimary(id, _) => RecordEvent::Updated {
                collection: CollectionKey::Contacts,
                id: id.clone(),
            },
            SetAddressField(id, _, _) | SetAddressDefault(id, _) => RecordEvent::Updated {
                collection: CollectionKey::Addresses,
                id: id.clone(),
            },
            SetTaxInvoiceField(id, _, _) => RecordEvent::Updated {
                collection: CollectionKey::TaxInvoices,
                id: id.clone(),
            },
            SetBankAccountField(id, _, _) | SetBankAccountDefault(id, _) => RecordEvent::Updated {
                collection: CollectionKey::BankAccounts,
                id: id.clone(),
            },
            SetDocumentField(id, _, _) | SetDocumentFile(id, _) => RecordEvent::Updated {
                collection: CollectionKey::Documents,
                id: id.clone(),
            },
            Remove(collection, id) => RecordEvent::Removed {
                collection: *collection,
                id: id.clone(),
            },
            CopyAddressIntoTaxInvoice { tax, address } => RecordEvent::AddressCopied {
                tax: tax.clone(),
                address: address.clone(),
            },
            SetChannel(channel, _) => RecordEvent::ChannelWritten { channel: *channel },
        }
    }
}
