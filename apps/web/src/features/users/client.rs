//! Client helpers for user endpoints. These keep endpoint paths centralized
//! and assume the backend enforces authorization.

use crate::{
    app_lib::{api, AppError},
    features::users::types::UserDetail,
};

/// Fetches user details by id after basic input validation.
pub async fn get_user(id: &str) -> Result<UserDetail, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("User id is required.".to_string()));
    }

    api::get_json(&format!("/api/users/{trimmed}/")).await
}
