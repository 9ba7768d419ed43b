//! View rendering for the jobs list page.
//!
//! The filter form is plain markup with named fields: its current state is
//! read back through `FormData` whenever a request is built, so the selects
//! are deliberately left uncontrolled.

use common::api::JOBS_PATH;
use common::model::outcome::Outcome;
use common::view::{JobRow, PagerItem};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::JobsComponent;

pub fn view(component: &JobsComponent, ctx: &Context<JobsComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="jobs-root">
            { build_filter_form(component, link) }
            { build_table(&component.rows) }
            { build_pager(&component.pager, link) }
        </div>
    }
}

/// Filter form with the job type and outcome selectors.
fn build_filter_form(component: &JobsComponent, link: &Scope<JobsComponent>) -> Html {
    let on_change = link.callback(|_: Event| Msg::FilterChanged);
    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::FilterChanged
    });

    html! {
        <form id="jobs-form" class="filter-form" action={JOBS_PATH} ref={component.form_ref.clone()} onsubmit={on_submit}>
            <label for="job-type-select">{"Job type"}</label>
            <select id="job-type-select" name="job_type" class="filter-select" multiple={true} onchange={on_change.clone()}>
                {
                    for component.job_types.iter().map(|job_type| html! {
                        <option value={job_type.clone()}>{ job_type.clone() }</option>
                    })
                }
            </select>
            <label for="job-status-select">{"Outcome"}</label>
            <select id="job-status-select" name="outcome" class="filter-select" multiple={true} onchange={on_change}>
                {
                    for Outcome::KNOWN.into_iter().map(|outcome| html! {
                        <option value={outcome.to_string()}>{ outcome.to_string() }</option>
                    })
                }
            </select>
        </form>
    }
}

fn build_table(rows: &[JobRow]) -> Html {
    html! {
        <table class="table jobs-table">
            <thead>
                <tr>
                    <th>{"Job"}</th>
                    <th>{"Notes"}</th>
                    <th>{"Created"}</th>
                    <th>{"Started"}</th>
                    <th>{"Finished"}</th>
                    <th>{"Status"}</th>
                </tr>
            </thead>
            <tbody id="jobs-table-body">
                { for rows.iter().map(build_row) }
            </tbody>
        </table>
    }
}

fn build_row(row: &JobRow) -> Html {
    html! {
        <tr class={classes!("job-row", row.row_class.clone())}>
            <td><a class="link" href={row.link_href.clone()}>{ row.link_text.clone() }</a></td>
            <td class="notes">{ row.notes.clone() }</td>
            <td>
                <span class="created-date">{ row.created_date.clone() }</span>
                {" "}
                <span class="created-time">{ row.created_time.clone() }</span>
            </td>
            <td class="started">{ row.started_time.clone() }</td>
            <td class="finished">{ row.finished_time.clone() }</td>
            <td class="status">{ row.status.clone() }</td>
        </tr>
    }
}

/// Pager links; a click re-fetches that page instead of navigating.
fn build_pager(items: &[PagerItem], link: &Scope<JobsComponent>) -> Html {
    html! {
        <ul id="page-control" class="pagination">
            {
                for items.iter().map(|item| {
                    let num = item.num;
                    let on_click = link.callback(move |e: MouseEvent| {
                        e.prevent_default();
                        Msg::Fetch(num)
                    });
                    html! {
                        <li class={classes!(item.class_name())}>
                            <a href="#" data-index={num.to_string()} onclick={on_click}>{ num }</a>
                        </li>
                    }
                })
            }
        </ul>
    }
}
