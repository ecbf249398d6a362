//! First step of the two-step password-reset interstitial: confirm the
//! username and current password, stash them for the set-password screen,
//! and move on. No session is established here.

use crate::app_lib::theme::Theme;
use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AuthCard, Button, Spinner};
use crate::features::auth::{client, storage};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
struct VerifyInput {
    username: String,
    current_password: String,
}

#[component]
pub fn VerifyIdentityPage() -> impl IntoView {
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (current_password, set_current_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let verify_action = Action::new_local(move |input: &VerifyInput| {
        let input = input.clone();
        async move {
            client::verify_credentials(&input.username, &input.current_password).await?;
            // Only verified credentials enter the stash; the set-password
            // screen replays them invisibly.
            storage::pending_reset_store().stash(&input.username, &input.current_password);
            Ok::<(), AppError>(())
        }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => navigate(paths::SET_PASSWORD, Default::default()),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let username_value = username.get_untracked().trim().to_string();
        let password_value = current_password.get_untracked();
        if username_value.is_empty() || password_value.is_empty() {
            set_error.set(Some(
                "Username and current password are required.".to_string(),
            ));
            return;
        }

        verify_action.dispatch(VerifyInput {
            username: username_value,
            current_password: password_value,
        });
    };

    view! {
        <AuthCard
            title="Verify your identity"
            subtitle="Enter your username and current password to continue"
        >
            <form on:submit=on_submit>
                <div class="mb-5">
                    <label class=Theme::LABEL for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        class=Theme::INPUT
                        autocomplete="username"
                        required
                        disabled=move || verify_action.pending().get()
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="current-password">"Current password"</label>
                    <input
                        id="current-password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="current-password"
                        required
                        disabled=move || verify_action.pending().get()
                        on:input=move |event| {
                            set_current_password.set(event_target_value(&event))
                        }
                    />
                </div>
                <Button button_type="submit" disabled=verify_action.pending()>
                    "Continue"
                </Button>
                {move || {
                    verify_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
            </form>
            <div class="mt-6 text-center text-sm">
                <A href=paths::LOGIN {..} class=Theme::LINK>
                    "Back to sign in"
                </A>
            </div>
        </AuthCard>
    }
}
