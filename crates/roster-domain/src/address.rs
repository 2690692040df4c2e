//! Postal address within a record

use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// A structured postal address in a record's address list.
///
/// Labels are auto-numbered at creation (`"<prefix> 1"`, `"<prefix> 2"`, …)
/// from the collection length at that moment; removing an earlier address
/// does not renumber the survivors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: EntityId,
    pub label: String,
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
    pub is_default: bool,
}

impl Address {
    /// Create an empty address with a freshly minted id and an
    /// auto-numbered label, where `existing` is the current collection size.
    pub fn numbered(prefix: &str, existing: usize) -> Self {
        let mut address = Self::with_id(EntityId::generate());
        address.label = format!("{} {}", prefix, existing + 1);
        address
    }

    /// Create an empty address with a known id.
    pub fn with_id(id: EntityId) -> Self {
        Self {
            id,
            label: String::new(),
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
            is_default: false,
        }
    }

    /// Builder method to set the house/building number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Builder method to set the province.
    pub fn with_province(mut self, province: impl Into<String>) -> Self {
        self.province = province.into();
        self
    }
}
