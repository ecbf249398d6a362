//! Profile screen for the signed-in user, fetched from the per-user endpoint.

use crate::app_lib::theme::Theme;
use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::storage;
use crate::features::users::client;
use crate::features::users::types::UserDetail;
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let user = LocalResource::new(move || {
        let user_id = storage::session_store().get().user_id.unwrap_or_default();
        async move {
            if user_id.trim().is_empty() {
                return Err(AppError::Config(
                    "Profile details are unavailable. Sign in again to refresh them.".to_string(),
                ));
            }

            client::get_user(&user_id).await
        }
    });

    view! {
        <AppShell>
            <div class="space-y-6 max-w-2xl">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "My profile"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Account details as known to the journeys backend."
                    </p>
                </div>
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match user.get() {
                        Some(Ok(detail)) => profile_card(detail).into_any(),
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

fn profile_card(detail: UserDetail) -> impl IntoView {
    let full_name = match (&detail.first_name, &detail.last_name) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        (Some(first), None) => first.clone(),
        (None, Some(last)) => last.clone(),
        (None, None) => "-".to_string(),
    };

    view! {
        <div class=format!("{} divide-y divide-gray-100 dark:divide-gray-700", Theme::CARD)>
            {profile_row("Username", detail.username.clone())}
            {profile_row("Name", full_name)}
            {profile_row("Email", detail.email.clone().unwrap_or_else(|| "-".to_string()))}
            {profile_row(
                "Department",
                detail.department.clone().unwrap_or_else(|| "-".to_string()),
            )}
        </div>
    }
}

fn profile_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="px-6 py-4 flex items-center justify-between">
            <span class="text-sm text-gray-500 dark:text-gray-400">{label}</span>
            <span class="text-sm font-medium text-gray-900 dark:text-white">{value}</span>
        </div>
    }
}
