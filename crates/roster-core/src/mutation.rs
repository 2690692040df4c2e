//! Mutation protocol over a record
//!
//! Field access is reflection-free: each collection gets an explicit field
//! selector enum with `get`/`set` per variant, so a mutation can only name
//! fields the schema actually has. Boolean primary/default flags travel as
//! their own variants rather than stringly-typed values.

use std::fmt;

use serde::{Deserialize, Serialize};

use roster_domain::{Address, BankAccount, Contact, Document, EntityId, FileRef, TaxInvoice};

use crate::primary::ContactChannel;

/// Names one of the record's five collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKey {
    Contacts,
    Addresses,
    TaxInvoices,
    BankAccounts,
    Documents,
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CollectionKey::Contacts => "contacts",
            CollectionKey::Addresses => "addresses",
            CollectionKey::TaxInvoices => "tax_invoices",
            CollectionKey::BankAccounts => "bank_accounts",
            CollectionKey::Documents => "documents",
        };
        write!(f, "{name}")
    }
}

/// Text field selector for [`Contact`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Phone,
    Email,
    Messenger,
    Social,
}

impl ContactField {
    pub fn get<'a>(&self, contact: &'a Contact) -> &'a str {
        match self {
            ContactField::Name => &contact.name,
            ContactField::Phone => &contact.phone,
            ContactField::Email => &contact.email,
            ContactField::Messenger => &contact.messenger,
            ContactField::Social => &contact.social,
        }
    }

    pub fn set(&self, contact: &mut Contact, value: String) {
        match self {
            ContactField::Name => contact.name = value,
            ContactField::Phone => contact.phone = value,
            ContactField::Email => contact.email = value,
            ContactField::Messenger => contact.messenger = value,
            ContactField::Social => contact.social = value,
        }
    }
}

/// Text field selector for [`Address`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressField {
    Label,
    Number,
    VillageNo,
    Village,
    Lane,
    Road,
    Subdistrict,
    District,
    Province,
    Zipcode,
    Maps,
}

impl AddressField {
    pub fn get<'a>(&self, address: &'a Address) -> &'a str {
        match self {
            AddressField::Label => &address.label,
            AddressField::Number => &address.number,
            AddressField::VillageNo => &address.village_no,
            AddressField::Village => &address.village,
            AddressField::Lane => &address.lane,
            AddressField::Road => &address.road,
            AddressField::Subdistrict => &address.subdistrict,
            AddressField::District => &address.district,
            AddressField::Province => &address.province,
            AddressField::Zipcode => &address.zipcode,
            AddressField::Maps => &address.maps,
        }
    }

    pub fn set(&self, address: &mut Address, value: String) {
        match self {
            AddressField::Label => address.label = value,
            AddressField::Number => address.number = value,
            AddressField::VillageNo => address.village_no = value,
            AddressField::Village => address.village = value,
            AddressField::Lane => address.lane = value,
            AddressField::Road => address.road = value,
            AddressField::Subdistrict => address.subdistrict = value,
            AddressField::District => address.district = value,
            AddressField::Province => address.province = value,
            AddressField::Zipcode => address.zipcode = value,
            AddressField::Maps => address.maps = value,
        }
    }
}

/// Text field selector for [`TaxInvoice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxInvoiceField {
    Company,
    TaxId,
    Branch,
    Number,
    VillageNo,
    Village,
    Lane,
    Road,
    Subdistrict,
    District,
    Province,
    Zipcode,
    Maps,
}

impl TaxInvoiceField {
    pub fn get<'a>(&self, invoice: &'a TaxInvoice) -> &'a str {
        match self {
            TaxInvoiceField::Company => &invoice.company,
            TaxInvoiceField::TaxId => &invoice.tax_id,
            TaxInvoiceField::Branch => &invoice.branch,
            TaxInvoiceField::Number => &invoice.number,
            TaxInvoiceField::VillageNo => &invoice.village_no,
            TaxInvoiceField::Village => &invoice.village,
            TaxInvoiceField::Lane => &invoice.lane,
            TaxInvoiceField::Road => &invoice.road,
            TaxInvoiceField::Subdistrict => &invoice.subdistrict,
            TaxInvoiceField::District => &invoice.district,
            TaxInvoiceField::Province => &invoice.province,
            TaxInvoiceField::Zipcode => &invoice.zipcode,
            TaxInvoiceField::Maps => &invoice.maps,
        }
    }

    pub fn set(&self, invoice: &mut TaxInvoice, value: String) {
        match self {
            TaxInvoiceField::Company => invoice.company = value,
            TaxInvoiceField::TaxId => invoice.tax_id = value,
            TaxInvoiceField::Branch => invoice.branch = value,
            TaxInvoiceField::Number => invoice.number = value,
            TaxInvoiceField::VillageNo => invoice.village_no = value,
            TaxInvoiceField::Village => invoice.village = value,
            TaxInvoiceField::Lane => invoice.lane = value,
            TaxInvoiceField::Road => invoice.road = value,
            TaxInvoiceField::Subdistrict => invoice.subdistrict = value,
            TaxInvoiceField::District => invoice.district = value,
            TaxInvoiceField::Province => invoice.province = value,
            TaxInvoiceField::Zipcode => invoice.zipcode = value,
            TaxInvoiceField::Maps => invoice.maps = value,
        }
    }
}

/// Text field selector for [`BankAccount`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankAccountField {
    BankName,
    AccountNumber,
    AccountName,
    Branch,
}

impl BankAccountField {
    pub fn get<'a>(&self, account: &'a BankAccount) -> &'a str {
        match self {
            BankAccountField::BankName => &account.bank_name,
            BankAccountField::AccountNumber => &account.account_number,
            BankAccountField::AccountName => &account.account_name,
            BankAccountField::Branch => &account.branch,
        }
    }

    pub fn set(&self, account: &mut BankAccount, value: String) {
        match self {
            BankAccountField::BankName => account.bank_name = value,
            BankAccountField::AccountNumber => account.account_number = value,
            BankAccountField::AccountName => account.account_name = value,
            BankAccountField::Branch => account.branch = value,
        }
    }
}

/// Text field selector for [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentField {
    DocType,
}

impl DocumentField {
    pub fn get<'a>(&self, document: &'a Document) -> &'a str {
        match self {
            DocumentField::DocType => &document.doc_type,
        }
    }

    pub fn set(&self, document: &mut Document, value: String) {
        match self {
            DocumentField::DocType => document.doc_type = value,
        }
    }
}

/// One edit to apply to a record.
///
/// Applying any variant is total: a mutation aimed at a missing entity
/// leaves the record unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RecordMutation {
    /// Append a freshly created sub-entity with its creation defaults.
    Add(CollectionKey),
    SetContactField(EntityId, ContactField, String),
    SetContactPrimary(EntityId, bool),
    SetAddressField(EntityId, AddressField, String),
    SetAddressDefault(EntityId, bool),
    SetTaxInvoiceField(EntityId, TaxInvoiceField, String),
    SetBankAccountField(EntityId, BankAccountField, String),
    SetBankAccountDefault(EntityId, bool),
    SetDocumentField(EntityId, DocumentField, String),
    /// Store the file reference resolved by the file-store collaborator.
    SetDocumentFile(EntityId, FileRef),
    Remove(CollectionKey, EntityId),
    /// Snapshot an address's fields onto a tax invoice (one-time copy).
    CopyAddressIntoTaxInvoice { tax: EntityId, address: EntityId },
    /// Write a record-level quick-access field through the primary contact.
    SetChannel(ContactChannel, String),
}
