//! One-screen password-reset variant for direct navigation: username,
//! current password, and the new password pair on a single form. Terminal
//! behavior matches the interstitial — success clears any stash and returns
//! to the login screen after a short delay.

use crate::app_lib::config::AppConfig;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AuthCard, Button, Spinner};
use crate::features::auth::{client, storage};
use crate::routes::paths;
use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use session_gate::PasswordPolicy;

const REDIRECT_DELAY_MS: u32 = 2_000;

#[derive(Clone)]
struct ResetInput {
    username: String,
    current_password: String,
    new_password: String,
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal(false);

    let reset_action = Action::new_local(move |input: &ResetInput| {
        let input = input.clone();
        async move {
            client::reset_password(
                &input.username,
                &input.current_password,
                &input.new_password,
            )
            .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(()) => {
                    storage::pending_reset_store().clear();
                    set_success.set(true);
                    let navigate_done = navigate.clone();
                    Timeout::new(REDIRECT_DELAY_MS, move || {
                        navigate_done(paths::LOGIN, Default::default());
                    })
                    .forget();
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let username_value = username.get_untracked().trim().to_string();
        let current_value = current_password.get_untracked();
        if username_value.is_empty() || current_value.is_empty() {
            set_error.set(Some(
                "Username and current password are required.".to_string(),
            ));
            return;
        }

        let policy = PasswordPolicy {
            min_length: AppConfig::load().password_min_length,
        };
        let new_value = new_password.get_untracked();
        if let Err(err) = policy.validate_new(&new_value, &confirm_password.get_untracked()) {
            set_error.set(Some(err.to_string()));
            return;
        }

        reset_action.dispatch(ResetInput {
            username: username_value,
            current_password: current_value,
            new_password: new_value,
        });
    };

    let busy = Signal::derive(move || reset_action.pending().get() || success.get());

    view! {
        <AuthCard
            title="Change your password"
            subtitle="Verify your current credentials and choose a new password"
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
                        disabled=move || busy.get()
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
                        disabled=move || busy.get()
                        on:input=move |event| {
                            set_current_password.set(event_target_value(&event))
                        }
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="new-password">"New password"</label>
                    <input
                        id="new-password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="new-password"
                        required
                        disabled=move || busy.get()
                        on:input=move |event| set_new_password.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="confirm-password">"Confirm new password"</label>
                    <input
                        id="confirm-password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="new-password"
                        required
                        disabled=move || busy.get()
                        on:input=move |event| {
                            set_confirm_password.set(event_target_value(&event))
                        }
                    />
                </div>
                <Button button_type="submit" disabled=busy>
                    "Change password"
                </Button>
                {move || {
                    reset_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    success
                        .get()
                        .then_some(
                            view! {
                                <div class="mt-4">
                                    <Alert
                                        kind=AlertKind::Success
                                        message="Password updated. Redirecting to sign-in..."
                                            .to_string()
                                    />
                                </div>
                            },
                        )
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
