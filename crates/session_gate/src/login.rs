//! Classification and settlement of login attempts.
//!
//! The backend distinguishes a forced password rotation from an ordinary
//! rejection with an HTTP 403 carrying `must_reset_password: true`. That
//! signal is not a terminal error: it carries the submitted credentials
//! forward into the reset interstitial. [`LoginResult`] makes the full set of
//! outcomes a closed enum so callers branch on variants instead of probing
//! ad-hoc fields on an error object.

use serde::Deserialize;

use crate::session::{PendingResetStore, SessionStore};
use crate::store::KeyValueStore;

const GENERIC_LOGIN_FAILURE: &str = "Invalid username or password.";
const MALFORMED_LOGIN_RESPONSE: &str = "Login response did not include a session token.";

/// Outcome of one login request, classified from the HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginResult {
    Success {
        token: String,
        username: Option<String>,
        user_id: Option<String>,
    },
    InvalidCredentials {
        message: String,
    },
    ResetRequired {
        message: String,
        redirect_url: Option<String>,
    },
    TransportError {
        message: String,
    },
}

/// What the caller should do after a [`LoginResult`] has been applied to the
/// stores by [`settle_login`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session persisted; navigate to the landing route.
    Authenticated,
    /// Credentials stashed for the reset interstitial; session untouched.
    ResetRequired {
        message: String,
        redirect_url: Option<String>,
    },
    /// Nothing persisted; surface the message inline.
    Rejected { message: String },
}

#[derive(Deserialize)]
struct LoginSuccessBody {
    token: Option<String>,
    username: Option<String>,
    user: Option<LoginUserBody>,
}

#[derive(Deserialize)]
struct LoginUserBody {
    id: Option<serde_json::Value>,
    username: Option<String>,
}

#[derive(Deserialize, Default)]
struct LoginErrorBody {
    error: Option<String>,
    detail: Option<String>,
    #[serde(default)]
    must_reset_password: bool,
    redirect_url: Option<String>,
}

/// Classifies a login response by status code and JSON body.
///
/// A 2xx response without a non-empty token is treated as a transport-shape
/// error rather than a success, so the session invariant (token non-empty
/// after success) holds unconditionally.
pub fn classify_login_response(status: u16, body: &str) -> LoginResult {
    if (200..300).contains(&status) {
        let parsed: LoginSuccessBody = match serde_json::from_str(body) {
            Ok(parsed) => parsed,
            Err(_) => {
                return LoginResult::TransportError {
                    message: MALFORMED_LOGIN_RESPONSE.to_string(),
                }
            }
        };

        let echoed_username = parsed
            .user
            .as_ref()
            .and_then(|user| user.username.clone())
            .or(parsed.username);
        let user_id = parsed.user.and_then(|user| user.id).map(id_to_string);

        match parsed.token.filter(|token| !token.is_empty()) {
            Some(token) => LoginResult::Success {
                token,
                username: echoed_username,
                user_id,
            },
            None => LoginResult::TransportError {
                message: MALFORMED_LOGIN_RESPONSE.to_string(),
            },
        }
    } else {
        let parsed: LoginErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .error
            .or(parsed.detail)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| GENERIC_LOGIN_FAILURE.to_string());

        if status == 403 && parsed.must_reset_password {
            LoginResult::ResetRequired {
                message,
                redirect_url: parsed.redirect_url,
            }
        } else {
            LoginResult::InvalidCredentials { message }
        }
    }
}

/// Applies a classified login result to the injected stores.
///
/// Success persists the session (an echoed username wins over the submitted
/// one) and clears any stale pending reset. A reset-required rejection
/// stashes the submitted credentials and leaves the session exactly as it
/// was. Every other failure touches neither store.
pub fn settle_login<D, T>(
    result: LoginResult,
    submitted_username: &str,
    submitted_password: &str,
    sessions: &SessionStore<D>,
    resets: &PendingResetStore<T>,
) -> LoginOutcome
where
    D: KeyValueStore,
    T: KeyValueStore,
{
    match result {
        LoginResult::Success {
            token,
            username,
            user_id,
        } => {
            let username = username
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| submitted_username.to_string());
            sessions.set(&token, &username, user_id.as_deref());
            resets.clear();
            LoginOutcome::Authenticated
        }
        LoginResult::ResetRequired {
            message,
            redirect_url,
        } => {
            resets.stash(submitted_username, submitted_password);
            LoginOutcome::ResetRequired {
                message,
                redirect_url,
            }
        }
        LoginResult::InvalidCredentials { message } | LoginResult::TransportError { message } => {
            LoginOutcome::Rejected { message }
        }
    }
}

fn id_to_string(id: serde_json::Value) -> String {
    match id {
        serde_json::Value::String(value) => value,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_login_response, LoginResult};

    #[test]
    fn success_with_bare_token() {
        let result = classify_login_response(200, r#"{"token":"abc123"}"#);
        assert_eq!(
            result,
            LoginResult::Success {
                token: "abc123".to_string(),
                username: None,
                user_id: None,
            }
        );
    }

    #[test]
    fn success_with_echoed_user() {
        let body = r#"{"token":"abc123","user":{"id":7,"username":"alice"}}"#;
        let result = classify_login_response(200, body);
        assert_eq!(
            result,
            LoginResult::Success {
                token: "abc123".to_string(),
                username: Some("alice".to_string()),
                user_id: Some("7".to_string()),
            }
        );
    }

    #[test]
    fn success_without_token_is_transport_error() {
        assert!(matches!(
            classify_login_response(200, r#"{"detail":"ok"}"#),
            LoginResult::TransportError { .. }
        ));
        assert!(matches!(
            classify_login_response(200, r#"{"token":""}"#),
            LoginResult::TransportError { .. }
        ));
        assert!(matches!(
            classify_login_response(200, "not json"),
            LoginResult::TransportError { .. }
        ));
    }

    #[test]
    fn forbidden_with_reset_flag_is_reset_required() {
        let body = r#"{"error":"You must change your password before logging in.","must_reset_password":true,"redirect_url":"/set-password"}"#;
        let result = classify_login_response(403, body);
        assert_eq!(
            result,
            LoginResult::ResetRequired {
                message: "You must change your password before logging in.".to_string(),
                redirect_url: Some("/set-password".to_string()),
            }
        );
    }

    #[test]
    fn forbidden_without_reset_flag_is_invalid_credentials() {
        let result = classify_login_response(403, r#"{"detail":"Account disabled."}"#);
        assert_eq!(
            result,
            LoginResult::InvalidCredentials {
                message: "Account disabled.".to_string(),
            }
        );
    }

    #[test]
    fn reset_flag_outside_403_is_not_honored() {
        let body = r#"{"error":"nope","must_reset_password":true}"#;
        assert!(matches!(
            classify_login_response(400, body),
            LoginResult::InvalidCredentials { .. }
        ));
    }

    #[test]
    fn unparseable_error_body_falls_back_to_generic_message() {
        let result = classify_login_response(400, "<html>Bad gateway</html>");
        assert_eq!(
            result,
            LoginResult::InvalidCredentials {
                message: "Invalid username or password.".to_string(),
            }
        );
    }
}
