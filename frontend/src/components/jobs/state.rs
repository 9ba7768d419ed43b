//! State of the jobs list page.
//!
//! Only what the last response delivered is kept: the rendered rows and pager
//! plus the job types for the filter. The filters themselves live in the form
//! and the page number in the URL or the pager that was clicked.

use common::view::{JobRow, PagerItem};
use yew::prelude::*;

pub struct JobsComponent {
    /// Rows of the last jobs response, in response order.
    pub rows: Vec<JobRow>,

    /// Pager of the last jobs response.
    pub pager: Vec<PagerItem>,

    /// Options of the job type filter, as returned by the metadata endpoint.
    pub job_types: Vec<String>,

    /// Reference to the `<form>` whose fields become the query string.
    pub form_ref: NodeRef,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl JobsComponent {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            pager: Vec::new(),
            job_types: Vec::new(),
            form_ref: NodeRef::default(),
            loaded: false,
        }
    }
}
