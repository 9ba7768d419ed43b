use common::api::{action_failure_message, job_url};
use common::view::JobDetail;
use gloo_net::http::Request;
use serde_json::Value;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::alert;

use super::actions::post_blocking;
use super::messages::Msg;
use super::state::JobComponent;

pub fn update(component: &mut JobComponent, ctx: &Context<JobComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            let url = job_url(&ctx.props().job_id);
            let link = ctx.link().clone();
            spawn_local(async move {
                let response = Request::get(&url).send().await;
                match response {
                    Ok(resp) if resp.ok() => match resp.json::<Value>().await {
                        Ok(raw) => match JobDetail::from_value(raw) {
                            Ok(detail) => link.send_message(Msg::Loaded(detail)),
                            Err(err) => gloo_console::warn!(format!("Unreadable job {}: {}", url, err)),
                        },
                        Err(err) => gloo_console::warn!(format!("Unreadable job {}: {}", url, err)),
                    },
                    Ok(resp) => gloo_console::warn!(format!(
                        "Job request {} failed with status {}",
                        url,
                        resp.status()
                    )),
                    Err(err) => gloo_console::warn!(format!("Job request {} failed: {}", url, err)),
                }
            });
            false
        }
        Msg::Loaded(detail) => {
            component.detail = Some(detail);
            true
        }
        Msg::Act(action) => {
            let Some(detail) = &component.detail else {
                return false;
            };
            match post_blocking(&detail.job.job_id, action) {
                Ok(()) => ctx.link().send_message(Msg::Load),
                Err(failure) => {
                    gloo_console::error!(format!("{} of {} rejected", action, detail.job.job_id));
                    alert(&action_failure_message(&failure.status_text, &failure.body));
                }
            }
            false
        }
    }
}
