//! Create screen for a journey template.

use crate::components::AppShell;
use crate::features::journeys::client;
use crate::routes::journeys::form::TemplateForm;
use crate::routes::paths;
use journey_forms::{JourneyKind, TemplateDraft, TemplatePayload};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn JourneyCreatePage() -> impl IntoView {
    let navigate = use_navigate();
    let (error, set_error) = signal::<Option<String>>(None);

    let create_action = Action::new_local(move |payload: &TemplatePayload| {
        let payload = payload.clone();
        async move { client::create_template(&payload).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
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
                        "New journey template"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Define the core details and ordered steps for this journey."
                    </p>
                </div>
                <TemplateForm
                    initial=TemplateDraft::blank(JourneyKind::Onboarding)
                    submit_label="Create template"
                    busy=create_action.pending()
                    error=error
                    on_submit=Callback::new(move |payload| {
                        create_action.dispatch(payload);
                    })
                />
            </div>
        </AppShell>
    }
}
