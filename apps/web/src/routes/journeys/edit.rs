//! Edit screen for an existing journey template.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::journeys::client;
use crate::routes::journeys::form::TemplateForm;
use crate::routes::paths;
use journey_forms::{TemplateDraft, TemplatePayload};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone)]
struct JourneyParams {
    id: Option<String>,
}

#[component]
pub fn JourneyEditPage() -> impl IntoView {
    let navigate = use_navigate();
    let params = use_params::<JourneyParams>();
    let (error, set_error) = signal::<Option<String>>(None);

    let params_for_fetch = params;
    let template = LocalResource::new(move || {
        let id = params_for_fetch
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default();
        async move {
            if id.trim().is_empty() {
                return Err(AppError::Config("Template id is required.".to_string()));
            }

            client::get_template(&id).await
        }
    });

    let params_for_effect = params;
    Effect::new(move |_| {
        let _ = params_for_effect.get();
        template.refetch();
    });

    let update_action = Action::new_local(move |input: &(String, TemplatePayload)| {
        let (id, payload) = input.clone();
        async move { client::update_template(&id, &payload).await }
    });

    Effect::new(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(_) => navigate(paths::JOURNEYS, Default::default()),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    view! {
        <AppShell>
            <div class="space-y-6 max-w-4xl">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Edit journey template"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Changes apply to future journeys only."
                    </p>
                </div>
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match template.get() {
                        Some(Ok(template)) => {
                            let id = template.id.clone();
                            view! {
                                <TemplateForm
                                    initial=TemplateDraft::from_template(&template)
                                    submit_label="Save changes"
                                    busy=update_action.pending()
                                    error=error
                                    on_submit=Callback::new(move |payload| {
                                        update_action.dispatch((id.clone(), payload));
                                    })
                                />
                            }
                            .into_any()
                        }
                        Some(Err(err)) => view! {
                            <Alert kind=AlertKind::Error message=err.to_string() />
                        }
                        .into_any(),
                        None => view! { <Spinner /> }.into_any(),
                    }}
                </Suspense>
            </div>
        </AppShell>
    }
}
