//! Client wrappers for the auth API endpoints. These helpers centralize
//! endpoint paths and the anti-forgery handshake, keeping auth flows
//! consistent and credential handling out of route code.

use crate::{
    app_lib::{api, AppError},
    features::auth::{
        csrf,
        types::{CurrentUser, LoginRequest, ResetPasswordRequest, VerifyCredentialsRequest},
    },
};
use session_gate::{classify_login_response, LoginResult};

const LOGIN_PATH: &str = "/api/auth/login/";
const LOGOUT_PATH: &str = "/api/auth/logout/";
const CURRENT_USER_PATH: &str = "/api/auth/user/";
const VERIFY_CREDENTIALS_PATH: &str = "/api/users/verify_credentials/";
const RESET_PASSWORD_PATH: &str = "/api/users/reset_password/";

const VERIFY_FALLBACK: &str = "Invalid username or password.";
const RESET_FALLBACK: &str = "Password reset failed.";

/// Submits credentials and classifies the outcome. The anti-forgery cookie
/// is acquired first; the credential POST never races it.
pub async fn login(username: &str, password: &str) -> LoginResult {
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    match api::post_json_for_status(LOGIN_PATH, &request, &csrf_headers().await).await {
        Ok((status, body)) => classify_login_response(status, &body),
        Err(err) => LoginResult::TransportError {
            message: err.to_string(),
        },
    }
}

/// Validates a username/password pair without establishing a session. Gates
/// entry into the set-password step of the reset interstitial.
pub async fn verify_credentials(username: &str, password: &str) -> Result<(), AppError> {
    let request = VerifyCredentialsRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let (status, body) =
        api::post_json_for_status(VERIFY_CREDENTIALS_PATH, &request, &csrf_headers().await)
            .await?;
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(AppError::Http {
            status,
            message: api::failure_message(&body, VERIFY_FALLBACK),
        })
    }
}

/// Rotates the account password. On success the caller clears the reset
/// stash and returns the user to the login screen; a reset never signs the
/// user in by itself.
pub async fn reset_password(
    username: &str,
    current_password: &str,
    new_password: &str,
) -> Result<(), AppError> {
    let request = ResetPasswordRequest {
        username: username.to_string(),
        current_password: current_password.to_string(),
        new_password: new_password.to_string(),
    };

    let (status, body) =
        api::post_json_for_status(RESET_PASSWORD_PATH, &request, &csrf_headers().await).await?;
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(AppError::Http {
            status,
            message: api::failure_message(&body, RESET_FALLBACK),
        })
    }
}

/// Ends the server-side session. The caller clears local state regardless of
/// the response.
pub async fn logout() -> Result<(), AppError> {
    api::post_empty(LOGOUT_PATH).await
}

/// Fetches the identity behind the current token.
pub async fn fetch_current_user() -> Result<CurrentUser, AppError> {
    api::get_json(CURRENT_USER_PATH).await
}

async fn csrf_headers() -> Vec<(String, String)> {
    match csrf::ensure_csrf_token().await {
        Some(token) => vec![(csrf::CSRF_HEADER.to_string(), token)],
        None => Vec::new(),
    }
}
