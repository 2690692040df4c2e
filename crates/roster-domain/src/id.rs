//! Sub-entity identifiers

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Identifier for a sub-entity within a record collection.
///
/// Entities loaded from a backing store carry small integer ids; entities
/// minted during an edit session carry the wall-clock time in milliseconds,
/// stringified. Both representations must address the same entity, so
/// equality and hashing go through the canonical string form: `"3"` and `3`
/// are the same id.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Num(i64),
    Text(String),
}

/// Last id issued by [`EntityId::generate`], as milliseconds.
static LAST_ISSUED_MS: AtomicI64 = AtomicI64::new(0);

impl EntityId {
    /// Mint a fresh session-local id from the wall clock.
    ///
    /// Monotonic within the process: a second id requested inside the same
    /// millisecond is bumped past the previous one, so ids stay unique even
    /// under back-to-back adds.
    pub fn generate() -> Self {
        let now = Utc::now().timestamp_millis();
        let mut prev = LAST_ISSUED_MS.load(Ordering::Relaxed);
        loop {
            let issued = now.max(prev + 1);
            match LAST_ISSUED_MS.compare_exchange_weak(
                prev,
                issued,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return EntityId::Text(issued.to_string()),
                Err(observed) => prev = observed,
            }
        }
    }

    /// Canonical string form used for equality and lookup.
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            EntityId::Num(n) => Cow::Owned(n.to_string()),
            EntityId::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl PartialEq for EntityId {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for EntityId {}

impl Hash for EntityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        EntityId::Num(n)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId::Text(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        EntityId::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(id: &EntityId) -> u64 {
        let mut h = DefaultHasher::new();
        id.hash(&mut h);
        h.finish()
    }

    #[test]
    fn numeric_and_text_forms_are_equal() {
        assert_eq!(EntityId::Num(3), EntityId::Text("3".to_string()));
        assert_eq!(EntityId::from(42), EntityId::from("42"));
        assert_ne!(EntityId::from(3), EntityId::from("30"));
    }

    #[test]
    fn hash_agrees_with_equality() {
        assert_eq!(hash_of(&EntityId::Num(7)), hash_of(&EntityId::from("7")));
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = EntityId::generate();
        let b = EntityId::generate();
        let c = EntityId::generate();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn generated_ids_are_stringified_milliseconds() {
        let id = EntityId::generate();
        match &id {
            EntityId::Text(s) => {
                assert!(s.parse::<i64>().is_ok(), "expected digits, got {s}");
            }
            EntityId::Num(_) => panic!("generated ids are text"),
        }
    }

    #[test]
    fn serde_preserves_representation() {
        let num: EntityId = serde_json::from_str("3").unwrap();
        assert!(matches!(num, EntityId::Num(3)));
        assert_eq!(serde_json::to_string(&num).unwrap(), "3");

        let text: EntityId = serde_json::from_str("\"1699000000000\"").unwrap();
        assert!(matches!(text, EntityId::Text(_)));
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"1699000000000\"");
    }

    #[test]
    fn display_uses_canonical_form() {
        assert_eq!(EntityId::Num(15).to_string(), "15");
        assert_eq!(EntityId::from("abc").to_string(), "abc");
    }
}
