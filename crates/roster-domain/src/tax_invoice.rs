//! Tax-invoice profile within a record

use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// Branch code for a head office registration.
pub const HEAD_OFFICE_BRANCH: &str = "00000";

/// A tax-invoice profile in a record's tax-invoice list.
///
/// The address-shaped fields hold a one-time snapshot copied from an
/// [`Address`](crate::Address); no live link to the source address is kept,
/// so later edits to the address do not propagate here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaxInvoice {
    pub id: EntityId,
    pub company: String,
    pub tax_id: String,
    pub branch: String,

    // Registered-address snapshot
    pub number: String,
    pub village_no: String,
    pub village: String,
    pub lane: String,
    pub road: String,
    pub subdistrict: String,
    pub district: String,
    pub province: String,
    pub zipcode: String,
    pub maps: String,
}

impl TaxInvoice {
    /// Create an empty tax invoice with a freshly minted id and the branch
    /// defaulted to the head-office code.
    pub fn new() -> Self {
        Self::with_id(EntityId::generate())
    }

    /// Create an empty tax invoice with a known id.
    pub fn with_id(id: EntityId) -> Self {
        Self {
            id,
            company: String::new(),
            tax_id: String::new(),
            branch: HEAD_OFFICE_BRANCH.to_string(),
            number: String::new(),
            village_no: String::new(),
            village: String::new(),
            lane: String::new(),
            road: String::new(),
            subdistrict: String::new(),
            district: String::new(),
            province: String::new(),
            zipcode: String::new(),
            maps: String::new(),
        }
    }

    /// Builder method to set the company name.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }
}

impl Default for TaxInvoice {
    fn default() -> Self {
        Self::new()
    }
}
