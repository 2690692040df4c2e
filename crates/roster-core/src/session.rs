//! Edit session ownership and notification
//!
//! A session exclusively owns one record between open and save/cancel —
//! that ownership is the whole concurrency model. Mutations run
//! synchronously to completion within one interaction turn, and the sink is
//! notified after every one.

use uuid::Uuid;

use roster_domain::{EntityId, Record, RecordDefaults};

use crate::apply;
use crate::capability::RecordSink;
use crate::event::RecordEvent;
use crate::mutation::{CollectionKey, RecordMutation};
use crate::primary::ContactChannel;

/// One editing session over one record.
pub struct EditSession<S: RecordSink> {
    id: Uuid,
    record: Record,
    defaults: RecordDefaults,
    sink: S,
}

impl<S: RecordSink> EditSession<S> {
    /// Open a session over a new or loaded-for-edit record.
    pub fn new(record: Record, defaults: RecordDefaults, sink: S) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, kind = ?record.kind, "edit session opened");
        Self {
            id,
            record,
            defaults,
            sink,
        }
    }

    /// The current record value.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// The creation defaults this session was opened with.
    pub fn defaults(&self) -> &RecordDefaults {
        &self.defaults
    }

    /// Apply one mutation, notify the sink, and return the id minted by an
    /// `Add`.
    pub fn apply(&mut self, mutation: RecordMutation) -> Option<EntityId> {
        let (next, added) = apply::apply(&self.record, &self.defaults, &mutation);
        let event = RecordEvent::describe(&mutation, added.as_ref());
        tracing::debug!(session = %self.id, event = ?event, "mutation applied");
        self.record = next;
        self.sink.record_changed(&self.record, &event);
        added
    }

    /// Append a fresh sub-entity to a collection; returns its minted id.
    pub fn add(&mut self, collection: CollectionKey) -> Option<EntityId> {
        self.apply(RecordMutation::Add(collection))
    }

    /// Remove a sub-entity by id; a missing id is absorbed silently.
    pub fn remove(&mut self, collection: CollectionKey, id: EntityId) {
        self.apply(RecordMutation::Remove(collection, id));
    }

    /// Write a quick-access channel through the primary contact.
    pub fn set_channel(&mut self, channel: ContactChannel, value: String) {
        self.apply(RecordMutation::SetChannel(channel, value));
    }

    /// Close the session, handing the final record to the caller (the
    /// persistence collaborator decides what happens to it).
    pub fn into_record(self) -> Record {
        tracing::debug!(session = %self.id, "edit session closed");
        self.record
    }
}
