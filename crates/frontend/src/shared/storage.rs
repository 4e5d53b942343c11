//! Thin wrappers around browser localStorage
//!
//! All persisted client state (active language, modal seen-flag, session
//! token/flags) goes through these helpers. Storage failures are treated as
//! "no value"; nothing here is allowed to panic.

use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}
