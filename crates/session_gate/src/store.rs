//! Storage seam for session state. The browser supplies implementations backed
//! by `localStorage` (durable tier) and `sessionStorage` (transient tier);
//! tests and non-browser targets use [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

/// Durable tier: opaque session token.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Durable tier: username of the signed-in account.
pub const USERNAME_KEY: &str = "username";
/// Durable tier: backend identifier of the signed-in account.
pub const USER_ID_KEY: &str = "userId";
/// Transient tier: username held during the forced password-reset flow.
pub const RESET_USERNAME_KEY: &str = "resetUsername";
/// Transient tier: current password held during the forced password-reset flow.
pub const RESET_CURRENT_PASSWORD_KEY: &str = "resetCurrentPassword";

/// Minimal key/value capability the session stores are built on.
///
/// Implementations are expected to be cheap to construct and free of caching;
/// every read goes to the underlying storage so guards never observe a stale
/// session within a tab.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store used by tests. Single-threaded access only; the UI event
/// loop is the sole writer in the browser and tests mirror that.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryStore};

    #[test]
    fn memory_store_round_trips_and_removes() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);

        store.set("authToken", "abc123");
        assert_eq!(store.get("authToken").as_deref(), Some("abc123"));

        store.set("authToken", "def456");
        assert_eq!(store.get("authToken").as_deref(), Some("def456"));

        store.remove("authToken");
        assert_eq!(store.get("authToken"), None);

        // Removing an absent key is a no-op.
        store.remove("authToken");
        assert_eq!(store.get("authToken"), None);
    }
}
