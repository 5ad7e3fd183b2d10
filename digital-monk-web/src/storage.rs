//! Browser storage backend and locale clock.

use digital_monk::{KeyValueStore, MemoryStore, StoreError, Timestamp};
use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen::JsValue;

/// `localStorage` when the browser allows it, otherwise an in-memory map that
/// lasts for the session.
#[derive(Debug, Clone)]
pub enum BrowserStore {
    Local,
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn detect() -> Self {
        let available = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .is_some();
        if available {
            BrowserStore::Local
        } else {
            log::warn!("localStorage unavailable, history will not survive a reload");
            BrowserStore::Memory(MemoryStore::new())
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local => LocalStorage::raw().get_item(key).ok().flatten(),
            BrowserStore::Memory(store) => store.read(key),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            BrowserStore::Local => LocalStorage::raw()
                .set_item(key, value)
                .map_err(|e| StoreError::Write(format!("{:?}", e))),
            BrowserStore::Memory(store) => store.write(key, value),
        }
    }

    fn remove(&mut self, key: &str) {
        match self {
            BrowserStore::Local => LocalStorage::delete(key),
            BrowserStore::Memory(store) => store.remove(key),
        }
    }
}

fn browser_locale() -> String {
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en-US".to_string())
}

/// Current date and time formatted for the user's locale.
pub fn now_timestamp() -> Timestamp {
    let now = js_sys::Date::new_0();
    let locale = browser_locale();
    Timestamp {
        date: now.to_locale_date_string(&locale, &JsValue::UNDEFINED).into(),
        time: now.to_locale_time_string(&locale).into(),
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
