//! Suite-scoped shared state
//!
//! The scope is the narrow view of a suite handed to setup hooks and case
//! bodies. A hook writes values here; the bodies that follow read them.

use std::sync::Mutex;

use serde_json::{Map, Value};

/// Shared scratch state for one suite, visible to its hook and case bodies
///
/// Values are JSON so hooks and bodies can exchange arbitrary data without
/// the suite types becoming generic. Access is synchronous; entries are small
/// and held only across a lock.
#[derive(Debug)]
pub struct SuiteScope {
    label: String,
    values: Mutex<Map<String, Value>>,
}

impl SuiteScope {
    pub(crate) fn new(label: String) -> Self {
        Self {
            label,
            values: Mutex::new(Map::new()),
        }
    }

    /// The owning suite's describe label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Store a value under `key`, replacing any previous entry
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.lock().insert(key.into(), value.into());
    }

    /// Fetch a copy of the value under `key`
    pub fn get(&self, key: &str) -> Option<Value> {
        self.lock().get(key).cloned()
    }

    /// Remove and return the value under `key`
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.lock().remove(key)
    }

    /// Discard all stored values
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Map<String, Value>> {
        // A poisoned scope only means a case panicked mid-write; the JSON map
        // itself is still structurally sound.
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_round_trip() {
        let scope = SuiteScope::new("counter widget".to_string());
        scope.insert("clicks", 3);
        scope.insert("visible", true);

        assert_eq!(scope.get("clicks"), Some(Value::from(3)));
        assert_eq!(scope.get("visible"), Some(Value::from(true)));
        assert_eq!(scope.get("missing"), None);
        assert_eq!(scope.label(), "counter widget");
    }

    #[test]
    fn test_remove_and_clear() {
        let scope = SuiteScope::new("s".to_string());
        scope.insert("a", "x");
        scope.insert("b", "y");

        assert_eq!(scope.remove("a"), Some(Value::from("x")));
        assert_eq!(scope.remove("a"), None);

        scope.clear();
        assert_eq!(scope.get("b"), None);
    }
}
