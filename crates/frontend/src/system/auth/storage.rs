//! The only thing the dashboard persists about a session is a flag in
//! localStorage; there are no tokens because there is no auth backend.

use web_sys::window;

const AUTH_STORAGE_KEY: &str = "isAuthenticated";

pub fn save_authenticated() {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(AUTH_STORAGE_KEY, "true");
    }
}

pub fn clear_authenticated() {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(AUTH_STORAGE_KEY);
    }
}

pub fn is_authenticated() -> bool {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(AUTH_STORAGE_KEY).ok().flatten())
        .as_deref()
        == Some("true")
}
