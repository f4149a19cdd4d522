//! Persisted Display Mode
//!
//! The dark-mode flag survives reloads via window.localStorage, JSON-encoded
//! under a fixed key so earlier builds of the client read the same value.

use web_sys::Storage;

const DARK_MODE_KEY: &str = "darkMode";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read the persisted flag; absent or unreadable means light mode.
pub fn load_dark_mode() -> bool {
    let Some(storage) = local_storage() else {
        return false;
    };
    match storage.get_item(DARK_MODE_KEY) {
        Ok(Some(raw)) => decode_flag(&raw),
        _ => false,
    }
}

/// Persist the flag immediately; storage errors are logged and swallowed.
pub fn save_dark_mode(dark: bool) {
    let Some(storage) = local_storage() else {
        return;
    };
    if storage.set_item(DARK_MODE_KEY, &encode_flag(dark)).is_err() {
        web_sys::console::error_1(&"Error persisting dark mode".into());
    }
}

fn encode_flag(dark: bool) -> String {
    serde_json::to_string(&dark).unwrap_or_else(|_| "false".to_string())
}

fn decode_flag(raw: &str) -> bool {
    serde_json::from_str(raw).unwrap_or(false)
}
