//! Client helpers for the journey-template endpoints. Paths stay centralized
//! here; the backend enforces authorization.

use crate::app_lib::{api, AppError};
use journey_forms::{JourneyKind, JourneyTemplate, TemplatePayload};

const TEMPLATES_PATH: &str = "/api/boarding/templates/";
const DEPARTMENTS_PATH: &str = "/api/boarding/templates/departments/";
const BUSINESS_UNITS_PATH: &str = "/api/boarding/templates/business_units/";

/// Fetches journey templates, optionally restricted to one journey type.
pub async fn list_templates(kind: Option<JourneyKind>) -> Result<Vec<JourneyTemplate>, AppError> {
    match kind {
        Some(kind) => {
            let path = format!("{TEMPLATES_PATH}?journey_type={}", kind.as_query_value());
            api::get_json(&path).await
        }
        None => api::get_json(TEMPLATES_PATH).await,
    }
}

/// Fetches one template by id after basic input validation.
pub async fn get_template(id: &str) -> Result<JourneyTemplate, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Template id is required.".to_string()));
    }

    api::get_json(&format!("{TEMPLATES_PATH}{trimmed}/")).await
}

pub async fn create_template(payload: &TemplatePayload) -> Result<JourneyTemplate, AppError> {
    api::post_json(TEMPLATES_PATH, payload).await
}

pub async fn update_template(
    id: &str,
    payload: &TemplatePayload,
) -> Result<JourneyTemplate, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Template id is required.".to_string()));
    }

    api::put_json(&format!("{TEMPLATES_PATH}{trimmed}/"), payload).await
}

pub async fn delete_template(id: &str) -> Result<(), AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Template id is required.".to_string()));
    }

    api::delete_resource(&format!("{TEMPLATES_PATH}{trimmed}/")).await
}

/// Department options for the template form selects.
pub async fn departments() -> Result<Vec<String>, AppError> {
    api::get_json(DEPARTMENTS_PATH).await
}

/// Business-unit options for the template form selects.
pub async fn business_units() -> Result<Vec<String>, AppError> {
    api::get_json(BUSINESS_UNITS_PATH).await
}
