//! Top bar for authenticated screens: search trigger, current user, sign-out.

use crate::features::auth::{client, state::use_auth};
use crate::routes::paths;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopBar(on_search: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let username =
        Signal::derive(move || auth.session.get().username.unwrap_or_default());

    let sign_out = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            // Best-effort server-side logout; local state is cleared regardless.
            let _ = client::logout().await;
            auth.clear();
            navigate(paths::LOGIN, Default::default());
        });
    };

    view! {
        <header class="h-16 flex items-center justify-between px-6 border-b border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900">
            <button
                type="button"
                class="inline-flex items-center gap-2 px-3 py-2 text-sm text-gray-500 dark:text-gray-400 border border-gray-200 dark:border-gray-700 rounded-lg hover:bg-gray-50 dark:hover:bg-gray-800 transition-colors"
                on:click=move |_| on_search.run(())
            >
                <span class="material-symbols-outlined text-base">"search"</span>
                "Search templates"
            </button>

            <div class="flex items-center gap-4">
                <span class="text-sm text-gray-600 dark:text-gray-300">
                    {move || username.get()}
                </span>
                <button
                    type="button"
                    class="text-sm font-medium text-gray-900 dark:text-white hover:text-blue-700 dark:hover:text-blue-400 transition-colors"
                    on:click=sign_out
                >
                    "Sign Out"
                </button>
            </div>
        </header>
    }
}
