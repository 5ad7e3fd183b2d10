//! Fortune history storage and management.
//!
//! The whole history is stored as one JSON array under [`STORAGE_HISTORY`].
//! Loading is schema-checked: a value that is not a JSON array is discarded,
//! and fields missing from older entries are back-filled with fixed defaults.

use serde::Serialize;
use serde_json::Value;

use super::{KeyValueStore, STORAGE_HISTORY};

pub const DEFAULT_DATE: &str = "Unknown Date";
pub const DEFAULT_TIME: &str = "Unknown Time";
pub const DEFAULT_STARTER: &str = "Unknown Initiator";
pub const DEFAULT_MOOD: &str = "Unknown Emotion";
pub const DEFAULT_COLOR: &str = "Unknown Color";
pub const DEFAULT_FOCUS: &str = "Unknown Focus";
pub const DEFAULT_ACTIVITY: &str = "Unknown Activity";
pub const DEFAULT_NICKNAME: &str = "N/A";
pub const DEFAULT_RESULT: &str = "No fortune recorded";

/// Locale-formatted wall-clock strings for a history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    pub date: String,
    pub time: String,
}

/// One fortune request attempt, successful or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub date: String,
    pub time: String,
    #[serde(rename = "initiator")]
    pub starter: String,
    #[serde(rename = "emotionState")]
    pub mood: String,
    pub color: String,
    pub focus: String,
    pub activity: String,
    pub nickname: String,
    /// The fortune text, or `"ERROR: ..."` for a failed attempt.
    #[serde(rename = "fortune")]
    pub result: String,
}

impl HistoryEntry {
    /// Coerce a stored JSON value into a full entry.
    ///
    /// Any field that is absent, `null`, empty or not a string gets its default.
    /// Non-object values produce an all-defaults entry.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str, default: &str| -> String {
            match value.get(key).and_then(Value::as_str) {
                Some(s) if !s.is_empty() => s.to_string(),
                _ => default.to_string(),
            }
        };

        Self {
            date: field("date", DEFAULT_DATE),
            time: field("time", DEFAULT_TIME),
            starter: field("initiator", DEFAULT_STARTER),
            mood: field("emotionState", DEFAULT_MOOD),
            color: field("color", DEFAULT_COLOR),
            focus: field("focus", DEFAULT_FOCUS),
            activity: field("activity", DEFAULT_ACTIVITY),
            nickname: field("nickname", DEFAULT_NICKNAME),
            result: field("fortune", DEFAULT_RESULT),
        }
    }

    pub fn is_error(&self) -> bool {
        self.result.starts_with("ERROR: ")
    }
}

/// Load history entries from the store.
///
/// Never fails: a corrupt or non-array value is logged, removed, and treated as
/// an empty history.
pub fn load(store: &mut impl KeyValueStore) -> Vec<HistoryEntry> {
    let Some(raw) = store.read(STORAGE_HISTORY) else {
        return Vec::new();
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => items.iter().map(HistoryEntry::from_value).collect(),
        Ok(_) => {
            log::warn!("Invalid history format in storage. Resetting.");
            store.remove(STORAGE_HISTORY);
            Vec::new()
        }
        Err(e) => {
            log::warn!("Failed to parse stored history ({}). Resetting.", e);
            store.remove(STORAGE_HISTORY);
            Vec::new()
        }
    }
}

/// Save history entries to the store.
///
/// An empty history is only written when the key already exists. Write
/// failures are logged; the in-memory history stays authoritative.
pub fn save(store: &mut impl KeyValueStore, entries: &[HistoryEntry]) {
    if entries.is_empty() && !store.contains(STORAGE_HISTORY) {
        return;
    }

    let json = match serde_json::to_string(entries) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize fortune history: {}", e);
            return;
        }
    };

    if let Err(e) = store.write(STORAGE_HISTORY, &json) {
        log::error!("Error saving fortune history: {}", e);
    }
}

/// Append an entry to the end of the history.
pub fn add(entries: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
    entries.push(entry);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::storage::MemoryStore;
    use serde_json::json;

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry {
            date: "5/4/2025".to_string(),
            time: format!("10:0{}:00 AM", n),
            starter: "I feel".to_string(),
            mood: "happy".to_string(),
            color: "yellow, like joy or clarity".to_string(),
            focus: "my work or career".to_string(),
            activity: "achieving small victories".to_string(),
            nickname: "Ada".to_string(),
            result: format!("Fortune \"{}\"", n),
        }
    }

    /// Store whose writes always fail, like a full quota.
    struct FullStore(MemoryStore);

    impl KeyValueStore for FullStore {
        fn read(&self, key: &str) -> Option<String> {
            self.0.read(key)
        }
        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write("QuotaExceededError".to_string()))
        }
        fn remove(&mut self, key: &str) {
            self.0.remove(key)
        }
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let mut store = MemoryStore::new();
        assert!(load(&mut store).is_empty());
        assert!(!store.contains(STORAGE_HISTORY));
    }

    #[test]
    fn test_round_trip() {
        let mut store = MemoryStore::new();
        let entries = vec![entry(1), entry(2), entry(3)];
        save(&mut store, &entries);
        assert_eq!(load(&mut store), entries);
    }

    #[test]
    fn test_persisted_field_names() {
        let mut store = MemoryStore::new();
        save(&mut store, &[entry(1)]);
        let stored: Value = serde_json::from_str(&store.read(STORAGE_HISTORY).unwrap()).unwrap();
        let obj = stored[0].as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "activity",
                "color",
                "date",
                "emotionState",
                "focus",
                "fortune",
                "initiator",
                "nickname",
                "time"
            ]
        );
    }

    #[test]
    fn test_corrupt_value_is_discarded() {
        let mut store = MemoryStore::with(STORAGE_HISTORY, "{not json");
        assert!(load(&mut store).is_empty());
        assert!(!store.contains(STORAGE_HISTORY));
    }

    #[test]
    fn test_non_array_value_is_discarded() {
        let mut store = MemoryStore::with(STORAGE_HISTORY, r#"{"date": "today"}"#);
        assert!(load(&mut store).is_empty());
        assert!(!store.contains(STORAGE_HISTORY));
    }

    #[test]
    fn test_partial_entries_are_back_filled() {
        let stored = json!([
            {"date": "1/1/2024", "fortune": "Old wisdom"},
            {"time": "", "nickname": null, "color": 7},
            "not an object"
        ]);
        let mut store = MemoryStore::with(STORAGE_HISTORY, &stored.to_string());
        let entries = load(&mut store);
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].date, "1/1/2024");
        assert_eq!(entries[0].time, DEFAULT_TIME);
        assert_eq!(entries[0].starter, DEFAULT_STARTER);
        assert_eq!(entries[0].nickname, DEFAULT_NICKNAME);
        assert_eq!(entries[0].result, "Old wisdom");

        assert_eq!(entries[1].time, DEFAULT_TIME);
        assert_eq!(entries[1].nickname, DEFAULT_NICKNAME);
        assert_eq!(entries[1].color, DEFAULT_COLOR);
        assert_eq!(entries[1].result, DEFAULT_RESULT);

        assert_eq!(entries[2], HistoryEntry::from_value(&json!({})));
        assert_eq!(entries[2].mood, DEFAULT_MOOD);
        assert_eq!(entries[2].focus, DEFAULT_FOCUS);
        assert_eq!(entries[2].activity, DEFAULT_ACTIVITY);
        assert_eq!(entries[2].date, DEFAULT_DATE);
    }

    #[test]
    fn test_empty_not_written_on_first_run() {
        let mut store = MemoryStore::new();
        save(&mut store, &[]);
        assert!(!store.contains(STORAGE_HISTORY));
    }

    #[test]
    fn test_empty_written_when_key_exists() {
        let mut store = MemoryStore::new();
        save(&mut store, &[entry(1)]);
        save(&mut store, &[]);
        assert_eq!(store.read(STORAGE_HISTORY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let mut store = FullStore(MemoryStore::new());
        save(&mut store, &[entry(1)]);
        assert!(!store.contains(STORAGE_HISTORY));
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut entries = vec![entry(1)];
        add(&mut entries, entry(2));
        add(&mut entries, entry(3));
        let times: Vec<&str> = entries.iter().map(|e| e.time.as_str()).collect();
        assert_eq!(times, ["10:01:00 AM", "10:02:00 AM", "10:03:00 AM"]);
    }

    #[test]
    fn test_is_error() {
        let mut e = entry(1);
        assert!(!e.is_error());
        e.result = "ERROR: Error: boom".to_string();
        assert!(e.is_error());
    }
}
