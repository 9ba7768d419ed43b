//! Jobs list page: filter form, jobs table and pager.
//!
//! On first render the page number is read from `?page=` and the first
//! request goes out together with the job types request. Every later request
//! is triggered by a filter change or a pager click and replaces the table
//! and pager wholesale when it arrives.

use common::api::JOB_TYPES_PATH;
use common::query::page_from_query;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::location_search;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::JobsComponent;

impl Component for JobsComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        JobsComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link()
                .send_message(Msg::Fetch(page_from_query(&location_search())));
            load_job_types(ctx.link().clone());
        }
    }
}

/// Fetches the job type catalogue once for the filter selector.
fn load_job_types(link: yew::html::Scope<JobsComponent>) {
    spawn_local(async move {
        match Request::get(JOB_TYPES_PATH).send().await {
            Ok(resp) if resp.ok() => match resp.json::<Vec<String>>().await {
                Ok(job_types) => link.send_message(Msg::JobTypesLoaded(job_types)),
                Err(err) => gloo_console::warn!(format!("Unreadable job types: {}", err)),
            },
            Ok(resp) => gloo_console::warn!(format!(
                "Job types request failed with status {}",
                resp.status()
            )),
            Err(err) => gloo_console::warn!(format!("Job types request failed: {}", err)),
        }
    });
}
