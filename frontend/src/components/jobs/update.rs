//! Update function for the jobs list page.
//!
//! Requests are never de-duplicated or cancelled: each `Fetch` starts its own
//! request and whichever response arrives last is what the table shows.

use chrono::Local;
use common::model::page::PageEnvelope;
use common::view::{job_rows, pager_items};
use gloo_net::http::Request;
use web_sys::HtmlFormElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::jobs_request_url;

use super::messages::Msg;
use super::state::JobsComponent;

pub fn update(component: &mut JobsComponent, ctx: &Context<JobsComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Fetch(page) => {
            let form = component.form_ref.cast::<HtmlFormElement>();
            let url = jobs_request_url(form.as_ref(), page);
            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::get(&url).send().await {
                    Ok(resp) if resp.ok() => match resp.json::<PageEnvelope>().await {
                        Ok(envelope) => link.send_message(Msg::JobsLoaded(envelope)),
                        Err(err) => {
                            gloo_console::warn!(format!("Unreadable jobs page {}: {}", url, err))
                        }
                    },
                    Ok(resp) => gloo_console::warn!(format!(
                        "Jobs request {} failed with status {}",
                        url,
                        resp.status()
                    )),
                    Err(err) => gloo_console::warn!(format!("Jobs request {} failed: {}", url, err)),
                }
            });
            false
        }
        Msg::JobsLoaded(envelope) => {
            component.rows = job_rows(&envelope.data, &Local);
            component.pager = pager_items(&envelope.paging);
            true
        }
        Msg::JobTypesLoaded(job_types) => {
            component.job_types = job_types;
            true
        }
        Msg::FilterChanged => {
            ctx.link().send_message(Msg::Fetch(1));
            false
        }
    }
}
