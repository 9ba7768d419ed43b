// Browser tests for the DOM helpers (run with `wasm-pack test --headless --firefox`).

#![cfg(target_arch = "wasm32")]

use jobboard_frontend::helpers::{form_action, form_fields, jobs_request_url};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlFormElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_form(inner_html: &str) -> HtmlFormElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let form = document.create_element("form").unwrap();
    form.set_inner_html(inner_html);
    document.body().unwrap().append_child(&form).unwrap();
    form.dyn_into::<HtmlFormElement>().unwrap()
}

#[wasm_bindgen_test]
fn selected_options_are_read_in_document_order() {
    let form = mount_form(
        r#"
        <select name="job_type" multiple>
            <option value="ingest" selected>ingest</option>
            <option value="export">export</option>
            <option value="report" selected>report</option>
        </select>
        <select name="outcome" multiple>
            <option value="error" selected>error</option>
        </select>
        "#,
    );

    assert_eq!(
        form_fields(&form),
        vec![
            ("job_type".to_string(), "ingest".to_string()),
            ("job_type".to_string(), "report".to_string()),
            ("outcome".to_string(), "error".to_string()),
        ]
    );
}

#[wasm_bindgen_test]
fn empty_form_has_no_fields() {
    let form = mount_form(r#"<select name="job_type" multiple><option value="x">x</option></select>"#);
    assert!(form_fields(&form).is_empty());
    assert_eq!(form_action(&form), None);
}

#[wasm_bindgen_test]
fn action_attribute_is_read_verbatim() {
    let form = mount_form("");
    form.set_attribute("action", "/api/jobs").unwrap();
    assert_eq!(form_action(&form).as_deref(), Some("/api/jobs"));
}

#[wasm_bindgen_test]
fn request_url_serializes_filters_then_page() {
    let form = mount_form(
        r#"
        <select name="job_type" multiple>
            <option value="ingest feed" selected>ingest feed</option>
            <option value="export">export</option>
        </select>
        <select name="outcome" multiple>
            <option value="success">success</option>
            <option value="error" selected>error</option>
        </select>
        "#,
    );
    form.set_attribute("action", "/api/jobs").unwrap();

    assert_eq!(
        jobs_request_url(Some(&form), 2),
        "/api/jobs?job_type=ingest+feed&outcome=error&page=2"
    );
}

#[wasm_bindgen_test]
fn request_url_without_form_is_unfiltered() {
    assert_eq!(jobs_request_url(None, 3), "/api/jobs?page=3");
}
