//! Side navigation for authenticated users, grouped by concern: overview
//! first, then journey-template management.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    view! {
        <aside class="w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto">
            <div class="px-6 py-5 flex items-center gap-3 border-b border-gray-100 dark:border-gray-800">
                <div class="w-8 h-8 rounded-lg bg-blue-700 flex items-center justify-center">
                    <span class="material-symbols-outlined text-white text-lg">"sailing"</span>
                </div>
                <span class="font-semibold text-gray-900 dark:text-white">"Embark"</span>
            </div>
            <nav class="flex-1 px-4 py-6 space-y-8">
                <div>
                    <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                        "Overview"
                    </h3>
                    <div class="mt-2 space-y-1">
                        <SidebarLink
                            target=paths::DASHBOARD
                            icon="dashboard"
                            label="Dashboard"
                            active=Signal::derive(move || pathname() == paths::DASHBOARD || pathname() == "/")
                        />
                        <SidebarLink
                            target=paths::PROFILE
                            icon="person"
                            label="My profile"
                            active=Signal::derive(move || pathname() == paths::PROFILE)
                        />
                    </div>
                </div>

                <div>
                    <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                        "Journeys"
                    </h3>
                    <div class="mt-2 space-y-1">
                        <SidebarLink
                            target=paths::JOURNEYS
                            icon="route"
                            label="Templates"
                            active=Signal::derive(move || {
                                pathname().starts_with(paths::JOURNEYS)
                                    && pathname() != paths::JOURNEY_NEW
                            })
                        />
                        <SidebarLink
                            target=paths::JOURNEY_NEW
                            icon="add_circle"
                            label="New template"
                            active=Signal::derive(move || pathname() == paths::JOURNEY_NEW)
                        />
                    </div>
                </div>
            </nav>

            <div class="p-4 border-t border-gray-100 dark:border-gray-800">
                <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    "Embark Journeys Admin"
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    #[prop(into)] active: Signal<bool>,
) -> impl IntoView {
    view! {
        <A
            href=target
            {..}
            attr:class="group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors"
            class:text-blue-600=move || active.get()
            class:bg-blue-50=move || active.get()
            class:dark:bg-blue-900=move || active.get()
            class:dark:text-blue-400=move || active.get()
            class:text-gray-600=move || !active.get()
            class:dark:text-gray-300=move || !active.get()
            class:hover:bg-gray-50=move || !active.get()
            class:dark:hover:bg-gray-800=move || !active.get()
        >
            <span class="material-symbols-outlined mr-3 text-xl">{icon}</span>
            {label}
        </A>
    }
}
