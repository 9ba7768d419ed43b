//! Browser GUI for the jobs API: a filterable, paginated jobs list and a
//! per-job detail page with retry/pause actions.

use crate::app::App;

mod app;
mod components;
pub mod helpers;

pub fn run() {
    yew::Renderer::<App>::new().render();
}
