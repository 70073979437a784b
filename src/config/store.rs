use crate::config::errors::ConfigError;
use serde_json::{Value, json};
use std::collections::BTreeMap;

pub mod keys {
    pub const MAX_ITER: &str = "max_iter";
    pub const MIN_C_REAL: &str = "min_c_real";
    pub const MIN_C_IMAG: &str = "min_c_imag";
    pub const Z_SIZE: &str = "z_size";
    pub const MANDEL_COLOR: &str = "mandel_color";
    pub const ALGORITHM: &str = "algorithm";
}

/// In-memory key-value configuration.
///
/// Values are kept as loosely typed JSON so that callers can hand over
/// whatever their settings UI produced; typing happens when a render
/// session resolves [`crate::config::settings::RenderSettings`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigStore {
    values: BTreeMap<String, Value>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ConfigStore {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        let mut store = Self::empty();

        store.set(keys::MAX_ITER, 255);
        store.set(keys::MIN_C_REAL, -2.0);
        store.set(keys::MIN_C_IMAG, -1.25);
        store.set(keys::Z_SIZE, 2.5);
        store.set(keys::MANDEL_COLOR, json!([0, 0, 0]));
        store.set(keys::ALGORITHM, "smooth");

        store
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Stores `raw` as JSON when it parses as JSON, otherwise as a string.
    pub fn set_raw(&mut self, key: impl Into<String>, raw: &str) -> Option<Value> {
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));

        self.set(key, value)
    }

    /// Applies a `key=value` assignment, as given on a command line.
    pub fn apply_assignment(&mut self, argument: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidAssignment {
            argument: argument.to_string(),
        };

        let (key, raw) = argument.split_once('=').ok_or_else(invalid)?;
        let key = key.trim();

        if key.is_empty() {
            return Err(invalid());
        }

        self.set_raw(key, raw.trim());
        Ok(())
    }

    /// Merges every entry of a JSON object into the store.
    pub fn merge_json(&mut self, json: &str) -> Result<(), ConfigError> {
        let parsed: Value = serde_json::from_str(json).map_err(|err| ConfigError::InvalidJson {
            message: err.to_string(),
        })?;

        let Value::Object(entries) = parsed else {
            return Err(ConfigError::InvalidJson {
                message: format!("expected an object, got {}", parsed),
            });
        };

        self.values.extend(entries);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_key() {
        let store = ConfigStore::with_defaults();

        assert_eq!(store.get(keys::MAX_ITER), Some(&json!(255)));
        assert_eq!(store.get(keys::MIN_C_REAL), Some(&json!(-2.0)));
        assert_eq!(store.get(keys::MIN_C_IMAG), Some(&json!(-1.25)));
        assert_eq!(store.get(keys::Z_SIZE), Some(&json!(2.5)));
        assert_eq!(store.get(keys::MANDEL_COLOR), Some(&json!([0, 0, 0])));
        assert_eq!(store.get(keys::ALGORITHM), Some(&json!("smooth")));
        assert_eq!(store.keys().count(), 6);
    }

    #[test]
    fn test_set_returns_previous_value() {
        let mut store = ConfigStore::empty();

        assert_eq!(store.set("max_iter", 10), None);
        assert_eq!(store.set("max_iter", 20), Some(json!(10)));
        assert_eq!(store.get("max_iter"), Some(&json!(20)));
    }

    #[test]
    fn test_set_raw_parses_json_then_falls_back_to_string() {
        let mut store = ConfigStore::empty();

        store.set_raw("max_iter", "500");
        store.set_raw("mandel_color", "[255, 0, 0]");
        store.set_raw("algorithm", "log");

        assert_eq!(store.get("max_iter"), Some(&json!(500)));
        assert_eq!(store.get("mandel_color"), Some(&json!([255, 0, 0])));
        assert_eq!(store.get("algorithm"), Some(&json!("log")));
    }

    #[test]
    fn test_apply_assignment() {
        let mut store = ConfigStore::empty();

        store.apply_assignment("z_size = 1.5").unwrap();

        assert_eq!(store.get("z_size"), Some(&json!(1.5)));
    }

    #[test]
    fn test_apply_assignment_keeps_equals_in_value() {
        let mut store = ConfigStore::empty();

        store.apply_assignment("algorithm=a=b").unwrap();

        assert_eq!(store.get("algorithm"), Some(&json!("a=b")));
    }

    #[test]
    fn test_apply_assignment_rejects_missing_key() {
        let mut store = ConfigStore::empty();

        assert_eq!(
            store.apply_assignment("=3"),
            Err(ConfigError::InvalidAssignment {
                argument: "=3".to_string()
            })
        );
        assert!(store.apply_assignment("max_iter").is_err());
    }

    #[test]
    fn test_merge_json_overrides_entries() {
        let mut store = ConfigStore::with_defaults();

        store
            .merge_json(r#"{"max_iter": 50, "algorithm": "log"}"#)
            .unwrap();

        assert_eq!(store.get(keys::MAX_ITER), Some(&json!(50)));
        assert_eq!(store.get(keys::ALGORITHM), Some(&json!("log")));
        assert_eq!(store.get(keys::Z_SIZE), Some(&json!(2.5)));
    }

    #[test]
    fn test_merge_json_rejects_non_objects() {
        let mut store = ConfigStore::empty();

        assert!(matches!(
            store.merge_json("[1, 2, 3]"),
            Err(ConfigError::InvalidJson { .. })
        ));
        assert!(matches!(
            store.merge_json("{not json"),
            Err(ConfigError::InvalidJson { .. })
        ));
    }
}
