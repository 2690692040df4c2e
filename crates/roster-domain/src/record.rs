//! Parent record owning the editable collections

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::bank_account::BankAccount;
use crate::contact::Contact;
use crate::document::Document;
use crate::tax_invoice::TaxInvoice;

/// What kind of party a record describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Customer,
    Employee,
}

/// The top-level customer or personnel entity being edited.
///
/// The record is the sole source of truth for one edit session: every
/// mutation produces a new `Record` value and the previous one is dropped.
/// Each collection is homogeneous and insertion order is display order,
/// preserved across mutation. `team` and `position` are meaningful for
/// `Employee` records and left empty otherwise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Backend identity; `None` until the persistence collaborator assigns one.
    pub id: Option<String>,
    pub kind: RecordKind,
    pub name: String,
    pub code: String,
    pub tax_id: String,
    pub team: String,
    pub position: String,

    pub contacts: Vec<Contact>,
    pub addresses: Vec<Address>,
    pub tax_invoices: Vec<TaxInvoice>,
    pub bank_accounts: Vec<BankAccount>,
    pub documents: Vec<Document>,
}

impl Record {
    /// Create an empty record for a fresh edit session.
    pub fn new(kind: RecordKind) -> Self {
        Self {
            id: None,
            kind,
            name: String::new(),
            code: String::new(),
            tax_id: String::new(),
            team: String::new(),
            position: String::new(),
            contacts: Vec::new(),
            addresses: Vec::new(),
            tax_invoices: Vec::new(),
            bank_accounts: Vec::new(),
            documents: Vec::new(),
        }
    }

    /// Builder method to set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
