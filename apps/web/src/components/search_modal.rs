//! Quick-search overlay for journey templates. Templates are fetched when the
//! modal opens and filtered client-side as the user types; selecting a result
//! navigates to its edit screen.

use crate::app_lib::theme::Theme;
use crate::app_lib::AppError;
use crate::components::Spinner;
use crate::features::journeys::client;
use crate::routes::paths;
use journey_forms::JourneyTemplate;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const MAX_RESULTS: usize = 8;

#[component]
pub fn SearchModal(#[prop(into)] open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let (query, set_query) = signal(String::new());

    let templates = LocalResource::new(move || {
        let enabled = open.get();
        async move {
            if enabled {
                client::list_templates(None).await
            } else {
                Ok(Vec::new())
            }
        }
    });

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-50 bg-gray-900/50 flex items-start justify-center pt-24 px-4"
                on:click=move |_| on_close.run(())
            >
                <div
                    class="w-full max-w-lg bg-white dark:bg-gray-800 rounded-xl shadow-xl border border-gray-200 dark:border-gray-700 overflow-hidden"
                    on:click=|event| event.stop_propagation()
                >
                    <div class="p-4 border-b border-gray-100 dark:border-gray-700">
                        <input
                            type="text"
                            class=Theme::INPUT
                            placeholder="Search journey templates"
                            prop:value=move || query.get()
                            on:input=move |event| set_query.set(event_target_value(&event))
                        />
                    </div>
                    <SearchResults templates=templates query=query on_close=on_close />
                </div>
            </div>
        </Show>
    }
}

#[component]
fn SearchResults(
    templates: LocalResource<Result<Vec<JourneyTemplate>, AppError>>,
    #[prop(into)] query: Signal<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="max-h-80 overflow-y-auto divide-y divide-gray-100 dark:divide-gray-700">
            {move || match templates.get() {
                None => view! {
                    <div class="p-6 text-center"><Spinner /></div>
                }
                .into_any(),
                Some(Err(err)) => view! {
                    <div class="p-4 text-sm text-red-600 dark:text-red-300">
                        {err.to_string()}
                    </div>
                }
                .into_any(),
                Some(Ok(list)) => {
                    let needle = query.get().trim().to_lowercase();
                    let matches: Vec<_> = list
                        .into_iter()
                        .filter(|template| {
                            needle.is_empty()
                                || template.title.to_lowercase().contains(&needle)
                                || template.department.as_deref().is_some_and(|department| {
                                    department.to_lowercase().contains(&needle)
                                })
                        })
                        .take(MAX_RESULTS)
                        .collect();

                    if matches.is_empty() {
                        view! {
                            <div class="p-6 text-center text-sm text-gray-500 dark:text-gray-400">
                                "No matching templates."
                            </div>
                        }
                        .into_any()
                    } else {
                        let navigate = navigate.clone();
                        matches
                            .into_iter()
                            .map(|template| {
                                let navigate = navigate.clone();
                                let id = template.id.clone();
                                view! {
                                    <button
                                        type="button"
                                        class="w-full flex items-center justify-between px-4 py-3 text-left hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors"
                                        on:click=move |_| {
                                            on_close.run(());
                                            navigate(&paths::journey_edit(&id), Default::default());
                                        }
                                    >
                                        <span class="text-sm font-medium text-gray-900 dark:text-white">
                                            {template.title.clone()}
                                        </span>
                                        <span class="text-xs text-gray-500 dark:text-gray-400">
                                            {template.journey_type.label()}
                                        </span>
                                    </button>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
