use common::requests::JobAction;
use common::view::{JobDetail, ResponsePane};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::json_view::JsonView;

use super::messages::Msg;
use super::state::JobComponent;

pub fn view(component: &JobComponent, ctx: &Context<JobComponent>) -> Html {
    match &component.detail {
        Some(detail) => build_detail(detail, ctx.link()),
        None => html! {
            <div class="job-root loading">{ format!("Loading job {}...", ctx.props().job_id) }</div>
        },
    }
}

fn build_detail(detail: &JobDetail, link: &Scope<JobComponent>) -> Html {
    html! {
        <div class="job-root">
            <h2>
                <span class="job-type">{ detail.job.job_type.clone() }</span>
                {" "}
                <span class={classes!("label", "outcome", detail.outcome_class().to_string())}>
                    { detail.job.outcome.to_string() }
                </span>
            </h2>
            <div class="job-actions">
                { for detail.controls.actions().into_iter().map(|action| action_button(action, link)) }
            </div>
            <h3>{"Request"}</h3>
            <div id="request"><JsonView value={detail.request_body()} /></div>
            <h3>{"Response"}</h3>
            <div id="response">{ build_response(&detail.response) }</div>
            <h3>{"Job"}</h3>
            <div id="all-the-jsons"><JsonView value={detail.raw.clone()} collapsed={true} /></div>
        </div>
    }
}

fn action_button(action: JobAction, link: &Scope<JobComponent>) -> Html {
    let (id, label) = match action {
        JobAction::Retry => ("retry-button", "Retry"),
        JobAction::Pause => ("pause-button", "Pause"),
    };
    html! {
        <button id={id} class="btn" onclick={link.callback(move |_| Msg::Act(action))}>
            { label }
        </button>
    }
}

fn build_response(response: &ResponsePane) -> Html {
    match response {
        ResponsePane::Json(value) => html! { <JsonView value={value.clone()} /> },
        ResponsePane::ErrorText(text) => html! {
            <textarea class="job-error" readonly={true} value={text.clone()} />
        },
        ResponsePane::Empty => html! {},
    }
}
