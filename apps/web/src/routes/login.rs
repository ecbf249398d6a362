//! Login route. Credentials are validated locally, exchanged for a session
//! token, and the outcome drives one of three paths: the landing route on
//! success, the reset interstitial when the backend demands a password
//! rotation, or an inline error.

use crate::app_lib::config::AppConfig;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AuthCard, Button, Spinner};
use crate::features::auth::{client, state::use_auth, storage};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use session_gate::{settle_login, LoginOutcome};

#[derive(Clone)]
struct LoginInput {
    username: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move {
            let result = client::login(&input.username, &input.password).await;
            settle_login(
                result,
                &input.username,
                &input.password,
                &storage::session_store(),
                &storage::pending_reset_store(),
            )
        }
    });

    Effect::new(move |_| {
        if let Some(outcome) = login_action.value().get() {
            match outcome {
                LoginOutcome::Authenticated => {
                    auth.refresh();
                    let landing = AppConfig::load().landing_route;
                    navigate(&landing, Default::default());
                }
                LoginOutcome::ResetRequired { redirect_url, .. } => {
                    // Credentials are already stashed; honor the backend's
                    // hint when it points at a local route.
                    let target = redirect_url
                        .as_deref()
                        .filter(|path| path.starts_with('/'))
                        .unwrap_or(paths::SET_PASSWORD);
                    navigate(target, Default::default());
                }
                LoginOutcome::Rejected { message } => set_error.set(Some(message)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let username_value = username.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if username_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some("Username and password are required.".to_string()));
            return;
        }

        login_action.dispatch(LoginInput {
            username: username_value,
            password: password_value,
        });
    };

    view! {
        <AuthCard title="Sign in to your account" subtitle="Enter your credentials">
            <form on:submit=on_submit>
                <div class="mb-5">
                    <label class=Theme::LABEL for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        class=Theme::INPUT
                        autocomplete="username"
                        placeholder="you@company.com"
                        required
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign In"
                </Button>
                {move || {
                    login_action
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
                <A href=paths::RESET_PASSWORD {..} class=Theme::LINK>
                    "Need to change your password?"
                </A>
            </div>
        </AuthCard>
    }
}
