//! Domain types shared across the roster suite
//!
//! This crate provides the canonical models for master-data records:
//! - Record: the customer or personnel entity being edited
//! - Contact, Address, TaxInvoice, BankAccount, Document: repeatable
//!   sub-entities owned by a record's ordered collections
//! - EntityId: dual numeric/string identifier with canonical-form equality
//! - RecordDefaults: injected creation defaults
//! - Validation: advisory required-field checks

pub mod address;
pub mod bank_account;
pub mod config;
pub mod contact;
pub mod document;
pub mod id;
pub mod record;
pub mod tax_invoice;
pub mod validation;

pub use address::*;
pub use bank_account::*;
pub use config::*;
pub use contact::*;
pub use document::*;
pub use id::*;
pub use record::*;
pub use tax_invoice::*;
pub use validation::*;
