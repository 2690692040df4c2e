//! Bank account within a record

use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// A bank account in a record's bank-account list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: EntityId,
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
    pub branch: String,
    pub is_default: bool,
}

impl BankAccount {
    /// Create an empty account with a freshly minted id and the bank name
    /// preset to the configured default bank code.
    pub fn new(default_bank: &str) -> Self {
        let mut account = Self::with_id(EntityId::generate());
        account.bank_name = default_bank.to_string();
        account
    }

    /// Create an empty account with a known id.
    pub fn with_id(id: EntityId) -> Self {
        Self {
            id,
            bank_name: String::new(),
            account_number: String::new(),
            account_name: String::new(),
            branch: String::new(),
            is_default: false,
        }
    }

    /// Builder method to set the account number.
    pub fn with_account_number(mut self, number: impl Into<String>) -> Self {
        self.account_number = number.into();
        self
    }
}
