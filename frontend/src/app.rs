use crate::components::job::JobComponent;
use crate::components::jobs::JobsComponent;
use crate::helpers::location_pathname;
use common::query::detail_job_id;
use yew::{html, Component, Context, Html};

/// Picks the page from the current path: `/jobs/{job_id}` shows a single job,
/// everything else the jobs list.
pub struct App {
    job_id: Option<String>,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let path = location_pathname();
        Self {
            job_id: detail_job_id(&path).map(str::to_string),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                {
                    match &self.job_id {
                        Some(job_id) => html! { <JobComponent job_id={job_id.clone()} /> },
                        None => html! { <JobsComponent /> },
                    }
                }
            </div>
        }
    }
}
