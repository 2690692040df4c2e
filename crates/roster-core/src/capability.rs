//! Collaborator capability boundaries
//!
//! The editing core consumes these narrow traits; implementations (network,
//! storage, AI extraction) live with the host. Failures are the
//! collaborator's to surface — the core does not retry, wrap, or transform
//! a `CapabilityError`, it only hands it back to the caller.

use thiserror::Error;

use roster_domain::{EntityId, FileRef, Record};

use crate::event::RecordEvent;
use crate::mutation::CollectionKey;

/// Errors surfaced by collaborator capabilities.
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// The collaborator refused the request (duplicate option, bad value).
    #[error("capability rejected the request: {0}")]
    Rejected(String),

    /// The collaborator could not be reached or is not configured.
    #[error("capability unavailable: {0}")]
    Unavailable(String),
}

/// Receives the record-changed notification after every mutation.
pub trait RecordSink {
    fn record_changed(&mut self, record: &Record, event: &RecordEvent);
}

/// Closures work as sinks, which keeps hosts and tests light.
impl<F: FnMut(&Record, &RecordEvent)> RecordSink for F {
    fn record_changed(&mut self, record: &Record, event: &RecordEvent) {
        self(record, event)
    }
}

/// AI-assisted field population. The core only supplies identifier
/// context; it never interprets the result, which arrives as ordinary
/// mutations issued by the host.
pub trait MagicPaste {
    fn request_fill(&self, section: CollectionKey, entity: Option<&EntityId>);
}

/// Category of a shared option list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionCategory {
    BankName,
    DocumentType,
}

/// Appends a new selectable option (e.g. a bank name) to a shared
/// registry.
pub trait OptionRegistry {
    fn add_option(&mut self, category: OptionCategory, value: &str) -> Result<(), CapabilityError>;
}

/// Creates a new team for the personnel "team" association.
pub trait TeamDirectory {
    fn add_team(&mut self, name: &str) -> Result<(), CapabilityError>;
}

/// Resolves a user-selected file into a stored reference for a document.
pub trait FileStore {
    fn attach(&mut self, document: &EntityId) -> Result<FileRef, CapabilityError>;
}
