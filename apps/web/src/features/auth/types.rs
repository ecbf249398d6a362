//! Request and response payloads for the auth endpoints. These bodies carry
//! credentials and must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct VerifyCredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ResetPasswordRequest {
    pub username: String,
    pub current_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, Deserialize)]
/// Identity summary returned by the current-user endpoint.
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}
