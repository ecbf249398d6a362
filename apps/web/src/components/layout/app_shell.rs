//! Chrome for authenticated screens: sidebar, top bar, and the content
//! container. Navigation is client-side only; the backend enforces access
//! control on every request.

use crate::components::layout::{Sidebar, TopBar};
use crate::components::SearchModal;
use leptos::prelude::*;

/// Wraps authenticated routes with navigation chrome.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (search_open, set_search_open) = signal(false);

    view! {
        <div class="min-h-screen flex bg-gray-50 dark:bg-gray-950">
            <Sidebar />
            <div class="flex-1 flex flex-col min-w-0">
                <TopBar on_search=Callback::new(move |()| set_search_open.set(true)) />
                <main class="flex-1 overflow-y-auto">
                    <div class="container mx-auto p-6">{children()}</div>
                </main>
            </div>
            <SearchModal
                open=search_open
                on_close=Callback::new(move |()| set_search_open.set(false))
            />
        </div>
    }
}
