//! Anti-forgery token acquisition. The backend sets a `csrftoken` cookie via
//! a dedicated endpoint; unsafe requests mirror it back in the `X-CSRFToken`
//! header.

use crate::app_lib::api;
use session_gate::cookie_value;
use wasm_bindgen::JsCast;

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

const CSRF_PATH: &str = "/api/auth/csrf/";

/// Returns the anti-forgery token, fetching the cookie from the backend once
/// if it is not present yet. The fetch settles before this returns, so a
/// dependent credential submission always observes the cookie.
pub async fn ensure_csrf_token() -> Option<String> {
    if let Some(token) = cookie_from_document() {
        return Some(token);
    }

    let _ = api::get_for_cookie(CSRF_PATH).await;
    cookie_from_document()
}

fn cookie_from_document() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html_document.cookie().ok()?;
    cookie_value(&cookies, CSRF_COOKIE)
}
