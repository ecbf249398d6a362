//! Build-time configuration with an optional runtime override. The runtime
//! config is read from `window.EMBARK_CONFIG` (if present) so static
//! deployments can change endpoints and policy without rebuilding.
//! Configuration values are public; do not store secrets here.

use session_gate::DEFAULT_MIN_PASSWORD_LENGTH;

/// Route users land on after login and when an authenticated user hits an
/// anonymous-only screen.
const DEFAULT_LANDING_ROUTE: &str = "/dashboard";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub landing_route: String,
    pub password_min_length: usize,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("EMBARK_API_BASE_URL").unwrap_or("");
        let landing_route = option_env!("EMBARK_LANDING_ROUTE").unwrap_or(DEFAULT_LANDING_ROUTE);
        let password_min_length = option_env!("EMBARK_PASSWORD_MIN_LENGTH")
            .and_then(parse_min_length)
            .unwrap_or(DEFAULT_MIN_PASSWORD_LENGTH);

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            landing_route: landing_route.to_string(),
            password_min_length,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    landing_route: Option<String>,
    password_min_length: Option<usize>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.landing_route {
        config.landing_route = value;
    }
    if let Some(value) = runtime.password_min_length {
        config.password_min_length = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("EMBARK_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        landing_route: read_runtime_value(&object, "landing_route"),
        password_min_length: read_runtime_value(&object, "password_min_length")
            .and_then(|value| parse_min_length(&value)),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let text = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&text)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_min_length(value: &str) -> Option<usize> {
    value.trim().parse().ok().filter(|length| *length > 0)
}

#[cfg(test)]
mod tests {
    use super::{
        apply_runtime_overrides, normalize_runtime_value, parse_min_length, AppConfig,
        RuntimeConfig,
    };

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.embark.dev "),
            Some("https://api.embark.dev".to_string())
        );
    }

    #[test]
    fn parse_min_length_rejects_junk_and_zero() {
        assert_eq!(parse_min_length("8"), Some(8));
        assert_eq!(parse_min_length(" 6 "), Some(6));
        assert_eq!(parse_min_length("0"), None);
        assert_eq!(parse_min_length("eight"), None);
    }

    #[test]
    fn apply_runtime_overrides_ignores_missing_values() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            landing_route: "/dashboard".to_string(),
            password_min_length: 8,
        };
        let runtime = RuntimeConfig::default();

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.landing_route, "/dashboard");
        assert_eq!(config.password_min_length, 8);
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            landing_route: "/dashboard".to_string(),
            password_min_length: 8,
        };
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            landing_route: normalize_runtime_value("/home"),
            password_min_length: parse_min_length("6"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.landing_route, "/home");
        assert_eq!(config.password_min_length, 6);
    }
}
