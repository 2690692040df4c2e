//! Attached document within a record

use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// Reference to an uploaded file, resolved by the file-store collaborator.
///
/// The core never touches file contents or transport; it only stores the
/// reference once the collaborator hands it back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileRef {
    pub url: String,
    pub name: String,
}

/// A document entry in a record's document list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: EntityId,
    pub doc_type: String,
    pub file: Option<FileRef>,
}

impl Document {
    /// Create a document with a freshly minted id, the configured default
    /// type, and no attached file.
    pub fn new(default_type: &str) -> Self {
        let mut document = Self::with_id(EntityId::generate());
        document.doc_type = default_type.to_string();
        document
    }

    /// Create an empty document with a known id.
    pub fn with_id(id: EntityId) -> Self {
        Self {
            id,
            doc_type: String::new(),
            file: None,
        }
    }
}
