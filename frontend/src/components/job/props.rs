use yew::prelude::*;

/// Properties for the `JobComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct JobProps {
    /// Id of the job to show, taken from the last segment of the page path.
    pub job_id: String,
}
