//! Centered card layout for anonymous screens (login and the password-reset
//! interstitials).

use leptos::prelude::*;

#[component]
pub fn AuthCard(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen w-full flex items-center justify-center bg-gray-50 dark:bg-gray-950 px-4">
            <div class="w-full max-w-md p-8 bg-white dark:bg-gray-800 rounded-xl shadow-xl border border-gray-200 dark:border-gray-700">
                <div class="flex items-center gap-3 mb-8">
                    <div class="w-10 h-10 rounded-lg bg-blue-700 flex items-center justify-center">
                        <span class="material-symbols-outlined text-white">"sailing"</span>
                    </div>
                    <span class="text-xl font-semibold text-gray-900 dark:text-white">
                        "Embark"
                    </span>
                </div>
                <h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-1">{title}</h2>
                <p class="text-sm text-gray-500 dark:text-gray-400 mb-6">{subtitle}</p>
                {children()}
            </div>
        </div>
    }
}
