//! Browser storage tiers behind the `session_gate` store types. The durable
//! tier (`localStorage`) holds the session so it survives tab close; the
//! transient tier (`sessionStorage`) holds the reset stash so it cannot.
//!
//! Constructors are cheap and stateless: every caller re-reads storage, which
//! keeps guards from observing a stale session within a tab.

use session_gate::{KeyValueStore, PendingResetStore, SessionStore};
use web_sys::Storage;

/// `localStorage`-backed tier.
pub struct LocalTier;

/// `sessionStorage`-backed tier.
pub struct SessionTier;

pub fn session_store() -> SessionStore<LocalTier> {
    SessionStore::new(LocalTier)
}

pub fn pending_reset_store() -> PendingResetStore<SessionTier> {
    PendingResetStore::new(SessionTier)
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok()).flatten()
}

fn session_storage() -> Option<Storage> {
    web_sys::window()
        .and_then(|window| window.session_storage().ok())
        .flatten()
}

impl KeyValueStore for LocalTier {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok()).flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

impl KeyValueStore for SessionTier {
    fn get(&self, key: &str) -> Option<String> {
        session_storage()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = session_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
