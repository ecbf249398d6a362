//! Session and pending-reset state over an injected [`KeyValueStore`].
//!
//! The session has no client-side expiry: it is created on login, re-read on
//! every navigation, and destroyed on logout or on the first authenticated
//! request that comes back 401. The pending reset lives in the transient tier
//! and must never outlast the password-reset interstitial.

use crate::store::{
    KeyValueStore, AUTH_TOKEN_KEY, RESET_CURRENT_PASSWORD_KEY, RESET_USERNAME_KEY, USERNAME_KEY,
    USER_ID_KEY,
};

/// Logged-in state of a browser tab. An absent token means unauthenticated;
/// protected screens must refuse to render content in that case.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub username: Option<String>,
    pub user_id: Option<String>,
}

impl Session {
    /// True when a non-empty token is present. Whether the token is still
    /// accepted by the backend is only discovered on the next request.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }
}

/// Single source of truth for "is anyone logged in, and who".
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Pure read; safe to call on every render and navigation.
    pub fn get(&self) -> Session {
        Session {
            token: self.read(AUTH_TOKEN_KEY),
            username: self.read(USERNAME_KEY),
            user_id: self.read(USER_ID_KEY),
        }
    }

    /// Idempotent overwrite of the whole session.
    pub fn set(&self, token: &str, username: &str, user_id: Option<&str>) {
        self.storage.set(AUTH_TOKEN_KEY, token);
        self.storage.set(USERNAME_KEY, username);
        match user_id {
            Some(id) => self.storage.set(USER_ID_KEY, id),
            None => self.storage.remove(USER_ID_KEY),
        }
    }

    /// Removes every session key. Idempotent; called on logout and on any
    /// authenticated request that returns 401.
    pub fn clear(&self) {
        self.storage.remove(AUTH_TOKEN_KEY);
        self.storage.remove(USERNAME_KEY);
        self.storage.remove(USER_ID_KEY);
    }

    fn read(&self, key: &str) -> Option<String> {
        self.storage.get(key).filter(|value| !value.is_empty())
    }
}

/// Credentials held only between a reset-required login rejection and the
/// completion (or abandonment) of the password-reset interstitial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReset {
    pub username: String,
    pub current_password: String,
}

/// Transient holding area for [`PendingReset`].
#[derive(Debug)]
pub struct PendingResetStore<S> {
    storage: S,
}

impl<S: KeyValueStore> PendingResetStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the stashed credentials, or `None` unless both halves are
    /// present and non-empty.
    pub fn get(&self) -> Option<PendingReset> {
        let username = self
            .storage
            .get(RESET_USERNAME_KEY)
            .filter(|value| !value.is_empty())?;
        let current_password = self
            .storage
            .get(RESET_CURRENT_PASSWORD_KEY)
            .filter(|value| !value.is_empty())?;
        Some(PendingReset {
            username,
            current_password,
        })
    }

    pub fn stash(&self, username: &str, current_password: &str) {
        self.storage.set(RESET_USERNAME_KEY, username);
        self.storage.set(RESET_CURRENT_PASSWORD_KEY, current_password);
    }

    /// Idempotent; called on reset success and on entry to any protected
    /// route so an abandoned interstitial cannot leave credentials behind.
    pub fn clear(&self) {
        self.storage.remove(RESET_USERNAME_KEY);
        self.storage.remove(RESET_CURRENT_PASSWORD_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::{PendingReset, PendingResetStore, Session, SessionStore};
    use crate::store::MemoryStore;

    #[test]
    fn absent_session_is_unauthenticated() {
        let sessions = SessionStore::new(MemoryStore::new());
        let session = sessions.get();
        assert_eq!(session, Session::default());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn set_then_get_round_trips() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.set("abc123", "alice", Some("7"));

        let session = sessions.get();
        assert!(session.is_authenticated());
        assert_eq!(session.token.as_deref(), Some("abc123"));
        assert_eq!(session.username.as_deref(), Some("alice"));
        assert_eq!(session.user_id.as_deref(), Some("7"));
    }

    #[test]
    fn set_overwrites_previous_session() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.set("abc123", "alice", Some("7"));
        sessions.set("def456", "bob", None);

        let session = sessions.get();
        assert_eq!(session.token.as_deref(), Some("def456"));
        assert_eq!(session.username.as_deref(), Some("bob"));
        assert_eq!(session.user_id, None);
    }

    #[test]
    fn clear_is_idempotent() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.set("abc123", "alice", None);

        sessions.clear();
        let once = sessions.get();
        sessions.clear();
        let twice = sessions.get();

        assert_eq!(once, Session::default());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_token_reads_as_unauthenticated() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.set("", "alice", None);
        assert!(!sessions.get().is_authenticated());
    }

    #[test]
    fn pending_reset_requires_both_halves() {
        let resets = PendingResetStore::new(MemoryStore::new());
        assert_eq!(resets.get(), None);

        resets.stash("bob", "temp-pass");
        assert_eq!(
            resets.get(),
            Some(PendingReset {
                username: "bob".to_string(),
                current_password: "temp-pass".to_string(),
            })
        );

        resets.clear();
        assert_eq!(resets.get(), None);
        resets.clear();
        assert_eq!(resets.get(), None);
    }
}
