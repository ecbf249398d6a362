//! Second step of the password-reset interstitial. Unreachable without a
//! stashed verification: the guard runs before any form field renders and
//! bounces straight to login when the stash is missing. On success the stash
//! is cleared and the user is returned to the login screen after a short
//! delay; a reset never signs the user in by itself.

use crate::app_lib::config::AppConfig;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AuthCard, Button, Spinner};
use crate::features::auth::{client, storage};
use crate::routes::paths;
use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session_gate::{PasswordPolicy, PendingReset};

/// Delay before returning to the login screen after a successful reset.
const REDIRECT_DELAY_MS: u32 = 2_000;

#[derive(Clone)]
struct ResetInput {
    pending: PendingReset,
    new_password: String,
}

#[component]
pub fn SetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let (stash, set_stash) = signal::<Option<PendingReset>>(None);
    let (checked, set_checked) = signal(false);
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal(false);

    let navigate_for_guard = navigate.clone();
    Effect::new(move |_| {
        if checked.get_untracked() {
            return;
        }
        set_checked.set(true);
        match storage::pending_reset_store().get() {
            Some(pending) => set_stash.set(Some(pending)),
            None => navigate_for_guard(paths::LOGIN, Default::default()),
        }
    });

    let reset_action = Action::new_local(move |input: &ResetInput| {
        let input = input.clone();
        async move {
            client::reset_password(
                &input.pending.username,
                &input.pending.current_password,
                &input.new_password,
            )
            .await
        }
    });

    let navigate_after = navigate.clone();
    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(()) => {
                    storage::pending_reset_store().clear();
                    set_success.set(true);
                    let navigate_done = navigate_after.clone();
                    Timeout::new(REDIRECT_DELAY_MS, move || {
                        navigate_done(paths::LOGIN, Default::default());
                    })
                    .forget();
                }
                // The stash is kept so the user can retry without re-entering
                // the username and current password.
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let Some(pending) = stash.get_untracked() else {
            return;
        };
        let policy = PasswordPolicy {
            min_length: AppConfig::load().password_min_length,
        };
        let new_value = new_password.get_untracked();
        if let Err(err) = policy.validate_new(&new_value, &confirm_password.get_untracked()) {
            set_error.set(Some(err.to_string()));
            return;
        }

        reset_action.dispatch(ResetInput {
            pending,
            new_password: new_value,
        });
    };

    view! {
        <AuthCard title="Set a new password" subtitle="Choose a new password for your account">
            <Show when=move || stash.get().is_some()>
                <form on:submit=on_submit>
                    <div class="mb-5">
                        <label class=Theme::LABEL for="new-password">"New password"</label>
                        <input
                            id="new-password"
                            type="password"
                            class=Theme::INPUT
                            autocomplete="new-password"
                            required
                            disabled=move || reset_action.pending().get() || success.get()
                            on:input=move |event| {
                                set_new_password.set(event_target_value(&event))
                            }
                        />
                    </div>
                    <div class="mb-5">
                        <label class=Theme::LABEL for="confirm-password">
                            "Confirm new password"
                        </label>
                        <input
                            id="confirm-password"
                            type="password"
                            class=Theme::INPUT
                            autocomplete="new-password"
                            required
                            disabled=move || reset_action.pending().get() || success.get()
                            on:input=move |event| {
                                set_confirm_password.set(event_target_value(&event))
                            }
                        />
                    </div>
                    <Button
                        button_type="submit"
                        disabled=Signal::derive(move || {
                            reset_action.pending().get() || success.get()
                        })
                    >
                        "Update password"
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
            </Show>
        </AuthCard>
    }
}
