//! Posting retry/pause actions to the jobs API.
//!
//! The request is synchronous: the page stays frozen until the API answers,
//! so a second click cannot be queued behind the first.

use common::api::action_url;
use common::requests::{ActionRequest, JobAction};
use wasm_bindgen::JsValue;
use web_sys::XmlHttpRequest;

/// Why an action was not accepted, as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionFailure {
    pub status_text: String,
    pub body: String,
}

impl ActionFailure {
    fn from_js(err: JsValue) -> Self {
        Self {
            status_text: "error".to_string(),
            body: err.as_string().unwrap_or_else(|| format!("{:?}", err)),
        }
    }
}

/// Posts `action` for `job_id` and blocks until the response is in.
pub fn post_blocking(job_id: &str, action: JobAction) -> Result<(), ActionFailure> {
    let body = serde_json::to_string(&ActionRequest::from_gui()).map_err(|e| ActionFailure {
        status_text: "error".to_string(),
        body: e.to_string(),
    })?;

    let xhr = XmlHttpRequest::new().map_err(ActionFailure::from_js)?;
    xhr.open_with_async("POST", &action_url(job_id, action), false)
        .map_err(ActionFailure::from_js)?;
    xhr.set_request_header("Content-Type", "application/json; charset=utf-8")
        .map_err(ActionFailure::from_js)?;
    xhr.send_with_opt_str(Some(&body))
        .map_err(ActionFailure::from_js)?;

    let status = xhr.status().map_err(ActionFailure::from_js)?;
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ActionFailure {
            status_text: xhr.status_text().unwrap_or_default(),
            body: xhr.response_text().ok().flatten().unwrap_or_default(),
        })
    }
}
