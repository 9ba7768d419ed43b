//! Thin wrappers over the browser APIs the pages need.
//!
//! - **Location**: the current path and query string, which carry the job id
//!   and the page number.
//! - **Forms**: reading the filter form's fields in document order, the way a
//!   form serialization sees them.
//! - **List URL**: the jobs request built from the filter form and a page.
//! - **Alerts**: the blocking `window.alert` used to report rejected actions.
//!
//! None of these panic when the DOM is not what they expect; they fall back
//! to empty values instead.

use common::api::JOBS_PATH;
use common::query::list_url;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

/// `window.location.pathname`, or an empty string outside a browsing context.
pub fn location_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// `window.location.search`, including the leading `?` when present.
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Shows a blocking alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// The form's `action` attribute as written in the markup.
pub fn form_action(form: &HtmlFormElement) -> Option<String> {
    form.get_attribute("action").filter(|a| !a.is_empty())
}

/// Successful fields of `form` as `(name, value)` pairs, in document order.
///
/// File inputs are skipped; a filter form has no use for them.
pub fn form_fields(form: &HtmlFormElement) -> Vec<(String, String)> {
    let Ok(data) = FormData::new_with_form(form) else {
        return Vec::new();
    };
    let Ok(Some(entries)) = js_sys::try_iter(data.as_ref()) else {
        return Vec::new();
    };

    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let pair: js_sys::Array = entry.dyn_into().ok()?;
            let name = pair.get(0).as_string()?;
            let value = pair.get(1).as_string()?;
            Some((name, value))
        })
        .collect()
}

/// Jobs list request for `page`: the form's action plus its serialized fields.
/// Without a mounted form the default jobs path is queried unfiltered.
pub fn jobs_request_url(form: Option<&HtmlFormElement>, page: u32) -> String {
    match form {
        Some(form) => {
            let action = form_action(form).unwrap_or_else(|| JOBS_PATH.to_string());
            list_url(&action, &form_fields(form), page)
        }
        None => {
            let no_fields: [(&str, &str); 0] = [];
            list_url(JOBS_PATH, &no_fields, page)
        }
    }
}
