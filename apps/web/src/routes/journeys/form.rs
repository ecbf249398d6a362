//! Shared create/edit form for journey templates: core details plus a
//! dynamic, ordered step editor. The draft is validated before the payload is
//! handed to the caller; the first invalid field blocks submission.

use crate::app_lib::theme::Theme;
use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::journeys::client;
use journey_forms::{JourneyKind, StepDraft, StepKind, TemplateDraft, TemplatePayload};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn TemplateForm(
    initial: TemplateDraft,
    submit_label: &'static str,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_submit: Callback<TemplatePayload>,
) -> impl IntoView {
    let draft = RwSignal::new(initial);
    let (local_error, set_local_error) = signal::<Option<String>>(None);

    let departments = LocalResource::new(|| async move { client::departments().await });
    let business_units = LocalResource::new(|| async move { client::business_units().await });

    let on_submit_form = move |event: SubmitEvent| {
        event.prevent_default();
        set_local_error.set(None);

        match draft.get_untracked().validate() {
            Ok(payload) => on_submit.run(payload),
            Err(err) => set_local_error.set(Some(err.to_string())),
        }
    };

    view! {
        <form class="space-y-8" on:submit=on_submit_form>
            <div class=format!("{} p-6 space-y-5", Theme::CARD)>
                <h2 class="text-sm font-semibold text-gray-900 dark:text-white">
                    "Journey details"
                </h2>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
                    <div>
                        <label class=Theme::LABEL for="journey-type">"Journey type"</label>
                        <select
                            id="journey-type"
                            class=Theme::INPUT
                            on:change=move |event| {
                                let kind = match event_target_value(&event).as_str() {
                                    "offboarding" => JourneyKind::Offboarding,
                                    _ => JourneyKind::Onboarding,
                                };
                                draft.update(|draft| draft.journey_type = kind);
                            }
                        >
                            <option
                                value="onboarding"
                                selected=move || {
                                    draft.get().journey_type == JourneyKind::Onboarding
                                }
                            >
                                "Onboarding"
                            </option>
                            <option
                                value="offboarding"
                                selected=move || {
                                    draft.get().journey_type == JourneyKind::Offboarding
                                }
                            >
                                "Offboarding"
                            </option>
                        </select>
                    </div>
                    <div>
                        <label class=Theme::LABEL for="duration">"Estimated duration (days)"</label>
                        <input
                            id="duration"
                            type="number"
                            min="1"
                            class=Theme::INPUT
                            prop:value=move || draft.get().estimated_duration_days
                            on:input=move |event| {
                                let value = event_target_value(&event);
                                draft.update(|draft| draft.estimated_duration_days = value);
                            }
                        />
                    </div>
                </div>

                <div>
                    <label class=Theme::LABEL for="title">"Title"</label>
                    <input
                        id="title"
                        type="text"
                        class=Theme::INPUT
                        placeholder="Engineering onboarding"
                        prop:value=move || draft.get().title
                        on:input=move |event| {
                            let value = event_target_value(&event);
                            draft.update(|draft| draft.title = value);
                        }
                    />
                </div>

                <div>
                    <label class=Theme::LABEL for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="3"
                        class=Theme::INPUT
                        prop:value=move || draft.get().description
                        on:input=move |event| {
                            let value = event_target_value(&event);
                            draft.update(|draft| draft.description = value);
                        }
                    ></textarea>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
                    <div>
                        <label class=Theme::LABEL for="department">"Department"</label>
                        <select
                            id="department"
                            class=Theme::INPUT
                            on:change=move |event| {
                                let value = event_target_value(&event);
                                draft.update(|draft| draft.department = value);
                            }
                        >
                            <option value="" selected=move || draft.get().department.is_empty()>
                                "Select department"
                            </option>
                            {move || {
                                option_list(
                                    departments.get(),
                                    draft.get().department,
                                )
                            }}
                        </select>
                    </div>
                    <div>
                        <label class=Theme::LABEL for="business-unit">"Business unit"</label>
                        <select
                            id="business-unit"
                            class=Theme::INPUT
                            on:change=move |event| {
                                let value = event_target_value(&event);
                                draft.update(|draft| draft.business_unit = value);
                            }
                        >
                            <option value="" selected=move || draft.get().business_unit.is_empty()>
                                "None"
                            </option>
                            {move || {
                                option_list(
                                    business_units.get(),
                                    draft.get().business_unit,
                                )
                            }}
                        </select>
                    </div>
                </div>
            </div>

            <div class=format!("{} p-6 space-y-5", Theme::CARD)>
                <div class="flex items-center justify-between">
                    <h2 class="text-sm font-semibold text-gray-900 dark:text-white">"Steps"</h2>
                    <button
                        type="button"
                        class="inline-flex items-center text-sm font-medium text-blue-600 hover:text-blue-800 dark:text-blue-400"
                        on:click=move |_| {
                            draft.update(|draft| draft.steps.push(StepDraft::blank()));
                        }
                    >
                        <span class="material-symbols-outlined mr-1 text-base">"add"</span>
                        "Add step"
                    </button>
                </div>

                {move || {
                    let step_count = draft.get().steps.len();
                    draft
                        .get()
                        .steps
                        .into_iter()
                        .enumerate()
                        .map(|(index, step)| step_editor(draft, index, step, step_count))
                        .collect_view()
                }}
            </div>

            <div class="flex items-center gap-4">
                <Button button_type="submit" disabled=busy>
                    {submit_label}
                </Button>
                {move || busy.get().then_some(view! { <Spinner /> })}
            </div>

            {move || {
                local_error
                    .get()
                    .or_else(|| error.get())
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}
        </form>
    }
}

fn option_list(fetched: Option<Result<Vec<String>, AppError>>, current: String) -> impl IntoView {
    let mut options = match fetched {
        Some(Ok(list)) => list,
        _ => Vec::new(),
    };
    // Keep an already-saved value selectable even when it is missing from the
    // fetched option list.
    if !current.is_empty() && !options.iter().any(|option| option == &current) {
        options.push(current.clone());
    }

    options
        .into_iter()
        .map(|option| {
            let is_current = option == current;
            view! {
                <option value=option.clone() selected=is_current>
                    {option}
                </option>
            }
        })
        .collect_view()
}

fn step_editor(
    draft: RwSignal<TemplateDraft>,
    index: usize,
    step: StepDraft,
    step_count: usize,
) -> impl IntoView {
    view! {
        <div class="border border-gray-200 dark:border-gray-700 rounded-lg p-4 space-y-4">
            <div class="flex items-center justify-between">
                <h3 class="text-sm font-medium text-gray-900 dark:text-white">
                    {format!("Step {}", index + 1)}
                </h3>
                {(step_count > 1)
                    .then_some(
                        view! {
                            <button
                                type="button"
                                class="text-sm text-red-600 hover:text-red-800 dark:text-red-400"
                                on:click=move |_| {
                                    draft.update(|draft| {
                                        if index < draft.steps.len() {
                                            draft.steps.remove(index);
                                        }
                                    });
                                }
                            >
                                "Remove"
                            </button>
                        },
                    )}
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div>
                    <label class=Theme::LABEL>"Title"</label>
                    <input
                        type="text"
                        class=Theme::INPUT
                        placeholder="Collect laptop"
                        prop:value=step.title.clone()
                        on:input=move |event| {
                            let value = event_target_value(&event);
                            draft.update(|draft| {
                                if let Some(step) = draft.steps.get_mut(index) {
                                    step.title = value;
                                }
                            });
                        }
                    />
                </div>
                <div>
                    <label class=Theme::LABEL>"Type"</label>
                    <select
                        class=Theme::INPUT
                        on:change=move |event| {
                            let kind = StepKind::from_wire(&event_target_value(&event))
                                .unwrap_or(StepKind::Task);
                            draft.update(|draft| {
                                if let Some(step) = draft.steps.get_mut(index) {
                                    step.kind = kind;
                                }
                            });
                        }
                    >
                        {StepKind::ALL
                            .into_iter()
                            .map(|kind| {
                                let is_current = kind == step.kind;
                                view! {
                                    <option value=kind.wire_value() selected=is_current>
                                        {kind.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label class=Theme::LABEL>"Responsible role"</label>
                    <input
                        type="text"
                        class=Theme::INPUT
                        placeholder="HR, IT, Manager..."
                        prop:value=step.responsible_role.clone()
                        on:input=move |event| {
                            let value = event_target_value(&event);
                            draft.update(|draft| {
                                if let Some(step) = draft.steps.get_mut(index) {
                                    step.responsible_role = value;
                                }
                            });
                        }
                    />
                </div>
                <div>
                    <label class=Theme::LABEL>"Due day"</label>
                    <input
                        type="number"
                        min="1"
                        class=Theme::INPUT
                        prop:value=step.due_days.clone()
                        on:input=move |event| {
                            let value = event_target_value(&event);
                            draft.update(|draft| {
                                if let Some(step) = draft.steps.get_mut(index) {
                                    step.due_days = value;
                                }
                            });
                        }
                    />
                </div>
            </div>

            <div>
                <label class=Theme::LABEL>"Description"</label>
                <input
                    type="text"
                    class=Theme::INPUT
                    prop:value=step.description.clone()
                    on:input=move |event| {
                        let value = event_target_value(&event);
                        draft.update(|draft| {
                            if let Some(step) = draft.steps.get_mut(index) {
                                step.description = value;
                            }
                        });
                    }
                />
            </div>
        </div>
    }
}
