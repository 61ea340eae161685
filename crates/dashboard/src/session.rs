//! Session flag helpers over `sessionStorage`.
//!
//! A single boolean flag marks a prior successful login for the lifetime of
//! the browser tab. Nothing else is persisted.

/// Key under which the login flag is stored in `sessionStorage`.
const STORAGE_KEY: &str = "tankview-logged-in";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Whether a login flag from a prior [`store_login`] is present.
#[must_use]
pub fn is_logged_in() -> bool {
    storage()
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .is_some()
}

/// Record a successful login for the rest of the browser session.
pub fn store_login() {
    if let Some(storage) = storage() {
        let _ = storage.set_item(STORAGE_KEY, "true");
    }
}

/// Drop the login flag, sending the next page load back through the gate.
pub fn clear_login() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}
