//! Auth session context for the frontend. The provider hydrates once from
//! durable browser storage and exposes derived signals for the chrome; route
//! guards deliberately bypass this context and re-read storage on every
//! navigation so they never act on a cached session.

use crate::features::auth::{client, storage};
use leptos::{prelude::*, task::spawn_local};
use session_gate::Session;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Session>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Session>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_authenticated());
        Self {
            session,
            is_authenticated,
        }
    }

    /// Re-reads storage after a login settles the session there.
    pub fn refresh(&self) {
        self.session.set(storage::session_store().get());
    }

    /// Clears both the stored session and the in-memory signal, typically on
    /// logout.
    pub fn clear(&self) {
        storage::session_store().clear();
        self.session.set(Session::default());
    }
}

/// Provides auth context, hydrated synchronously from storage on mount and
/// refreshed once against the current-user endpoint. A stale token surfaces
/// here as the first 401, which clears the session via the api layer.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(storage::session_store().get());
    let auth = AuthContext::new(session);
    provide_context(auth);

    spawn_local(async move {
        let sessions = storage::session_store();
        if !sessions.get().is_authenticated() {
            return;
        }
        if let Ok(user) = client::fetch_current_user().await {
            if let Some(token) = sessions.get().token {
                sessions.set(&token, &user.username, Some(&user.id.to_string()));
                auth.refresh();
            }
        }
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let session = RwSignal::new(Session::default());
        AuthContext::new(session)
    })
}
