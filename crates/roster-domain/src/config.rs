//! Injected creation defaults
//!
//! Default values applied when sub-entities are created live here rather
//! than as hidden module constants, so hosts can swap them per deployment.

use serde::{Deserialize, Serialize};

/// Default values used when new sub-entities are added to a record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordDefaults {
    /// Prefix for auto-numbered address labels ("Address 1", "Address 2", …).
    pub address_label_prefix: String,
    /// Bank code preset on a newly added bank account.
    pub bank_code: String,
    /// Document type preset on a newly added document.
    pub document_type: String,
    /// Name given to a contact synthesized by a quick-access field write.
    pub placeholder_contact_name: String,
}

impl Default for RecordDefaults {
    fn default() -> Self {
        Self {
            address_label_prefix: "Address".to_string(),
            bank_code: "004".to_string(),
            document_type: "id-card".to_string(),
            placeholder_contact_name: "Contact".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_defaults() {
        let defaults = RecordDefaults::default();
        assert_eq!(defaults.address_label_prefix, "Address");
        assert_eq!(defaults.bank_code, "004");
        assert_eq!(defaults.document_type, "id-card");
        assert_eq!(defaults.placeholder_contact_name, "Contact");
    }
}
