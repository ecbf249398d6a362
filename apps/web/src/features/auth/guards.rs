//! Route guards. Each instance performs a one-shot session check on mount:
//! `Unknown` renders a neutral placeholder (never the children, never a
//! redirect), then the instance settles into rendering or navigating away.
//! The session is re-read from storage on every navigation; nothing is
//! cached across guard instances.

use crate::app_lib::config::AppConfig;
use crate::features::auth::storage;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session_gate::{decide, GuardDecision, GuardKind, GuardState};

/// Wraps screens that require an authenticated session. Anonymous visitors
/// are sent to the login screen. An authorized entry also clears any stale
/// reset stash so an abandoned interstitial cannot leave credentials in the
/// transient tier.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let (state, set_state) = signal(GuardState::Unknown);
    let navigate = use_navigate();

    Effect::new(move |_| {
        if state.get_untracked() != GuardState::Unknown {
            return;
        }
        let session = storage::session_store().get();
        match decide(GuardKind::Protected, &session) {
            GuardDecision::Render => {
                storage::pending_reset_store().clear();
                set_state.set(GuardState::Authorized);
            }
            GuardDecision::Redirect => {
                set_state.set(GuardState::Unauthorized);
                navigate(paths::LOGIN, Default::default());
            }
        }
    });

    view! {
        {move || match state.get() {
            GuardState::Authorized => children().into_any(),
            _ => view! { <GuardPlaceholder /> }.into_any(),
        }}
    }
}

/// Wraps anonymous-only screens (login, reset interstitials). Authenticated
/// visitors are sent to the configured landing route instead.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    let (state, set_state) = signal(GuardState::Unknown);
    let navigate = use_navigate();

    Effect::new(move |_| {
        if state.get_untracked() != GuardState::Unknown {
            return;
        }
        let session = storage::session_store().get();
        match decide(GuardKind::Public, &session) {
            GuardDecision::Render => set_state.set(GuardState::Authorized),
            GuardDecision::Redirect => {
                set_state.set(GuardState::Unauthorized);
                let landing = AppConfig::load().landing_route;
                navigate(&landing, Default::default());
            }
        }
    });

    view! {
        {move || match state.get() {
            GuardState::Authorized => children().into_any(),
            _ => view! { <GuardPlaceholder /> }.into_any(),
        }}
    }
}

/// Neutral full-screen placeholder shown while a guard is undecided or a
/// redirect is in flight.
#[component]
fn GuardPlaceholder() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center min-h-screen bg-white dark:bg-gray-900">
            <div class="animate-pulse text-gray-400">"Loading..."</div>
        </div>
    }
}
