//! Journey template list with a journey-type filter and delete confirmation.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, ConfirmDialog, Spinner};
use crate::features::journeys::client;
use crate::routes::paths;
use journey_forms::{JourneyKind, JourneyTemplate};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn JourneyListPage() -> impl IntoView {
    let (kind_filter, set_kind_filter) = signal::<Option<JourneyKind>>(None);
    let (refresh, set_refresh) = signal(0u32);
    let (pending_delete, set_pending_delete) = signal::<Option<JourneyTemplate>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let templates = LocalResource::new(move || {
        let kind = kind_filter.get();
        refresh.track();
        async move { client::list_templates(kind).await }
    });

    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_template(&id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    set_pending_delete.set(None);
                    set_refresh.update(|count| *count += 1);
                }
                Err(err) => {
                    set_pending_delete.set(None);
                    set_error.set(Some(err.to_string()));
                }
            }
        }
    });

    let filter_button = move |label: &'static str, kind: Option<JourneyKind>| {
        let is_active = move || kind_filter.get() == kind;
        view! {
            <button
                type="button"
                class="px-3 py-1.5 text-sm rounded-lg border transition-colors"
                class:bg-blue-700=is_active
                class:text-white=is_active
                class:border-blue-700=is_active
                class:bg-white=move || !is_active()
                class:text-gray-600=move || !is_active()
                class:border-gray-200=move || !is_active()
                on:click=move |_| set_kind_filter.set(kind)
            >
                {label}
            </button>
        }
    };

    view! {
        <AppShell>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Journey templates"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "Onboarding and offboarding workflows by department."
                        </p>
                    </div>
                    <A
                        href=paths::JOURNEY_NEW
                        {..}
                        class="inline-flex items-center px-4 py-2 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 transition-colors"
                    >
                        <span class="material-symbols-outlined mr-2 text-base">"add"</span>
                        "New template"
                    </A>
                </div>

                <div class="flex gap-2">
                    {filter_button("All", None)}
                    {filter_button("Onboarding", Some(JourneyKind::Onboarding))}
                    {filter_button("Offboarding", Some(JourneyKind::Offboarding))}
                </div>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}

                <div class=format!("overflow-hidden {}", Theme::CARD)>
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                            <tr>
                                <th scope="col" class=Theme::TH>"Title"</th>
                                <th scope="col" class=Theme::TH>"Type"</th>
                                <th scope="col" class=Theme::TH>"Department"</th>
                                <th scope="col" class=Theme::TH>"Duration"</th>
                                <th scope="col" class=Theme::TH>"Steps"</th>
                                <th
                                    scope="col"
                                    class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider"
                                >
                                    "Actions"
                                </th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            <Suspense fallback=move || view! {
                                <tr>
                                    <td colspan="6" class="px-6 py-12 text-center">
                                        <Spinner />
                                    </td>
                                </tr>
                            }>
                                {move || match templates.get() {
                                    Some(Ok(list)) if list.is_empty() => view! {
                                        <tr>
                                            <td
                                                colspan="6"
                                                class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400"
                                            >
                                                "No journey templates yet."
                                            </td>
                                        </tr>
                                    }
                                    .into_any(),
                                    Some(Ok(list)) => list
                                        .into_iter()
                                        .map(|template| template_row(template, set_pending_delete))
                                        .collect_view()
                                        .into_any(),
                                    Some(Err(err)) => view! {
                                        <tr>
                                            <td colspan="6" class="px-6 py-6">
                                                <Alert
                                                    kind=AlertKind::Error
                                                    message=err.to_string()
                                                />
                                            </td>
                                        </tr>
                                    }
                                    .into_any(),
                                    None => view! {
                                        <tr>
                                            <td colspan="6" class="px-6 py-12 text-center">
                                                <Spinner />
                                            </td>
                                        </tr>
                                    }
                                    .into_any(),
                                }}
                            </Suspense>
                        </tbody>
                    </table>
                </div>
            </div>

            {move || {
                pending_delete
                    .get()
                    .map(|template| {
                        let id = template.id.clone();
                        view! {
                            <ConfirmDialog
                                title="Delete journey template".to_string()
                                message=format!(
                                    "\"{}\" and its steps will be removed. This cannot be undone.",
                                    template.title,
                                )
                                confirm_label="Delete"
                                busy=delete_action.pending()
                                on_confirm=Callback::new(move |()| {
                                    delete_action.dispatch(id.clone());
                                })
                                on_cancel=Callback::new(move |()| set_pending_delete.set(None))
                            />
                        }
                    })
            }}
        </AppShell>
    }
}

fn template_row(
    template: JourneyTemplate,
    set_pending_delete: WriteSignal<Option<JourneyTemplate>>,
) -> impl IntoView {
    let edit_href = paths::journey_edit(&template.id);
    let department = template.department.clone().unwrap_or_else(|| "-".to_string());
    let for_delete = template.clone();

    view! {
        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                <A href=edit_href {..} class=Theme::LINK>
                    {template.title.clone()}
                </A>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                {template.journey_type.label()}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                {department}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                {format!("{} days", template.estimated_duration_days)}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                {template.steps.len().to_string()}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-right text-sm">
                <button
                    type="button"
                    class="text-red-600 hover:text-red-800 dark:text-red-400 dark:hover:text-red-300 font-medium"
                    on:click=move |_| set_pending_delete.set(Some(for_delete.clone()))
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
