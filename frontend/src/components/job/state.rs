use common::view::JobDetail;

pub struct JobComponent {
    /// The job as last fetched; `None` until the first response arrives.
    pub detail: Option<JobDetail>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl JobComponent {
    pub fn new() -> Self {
        Self {
            detail: None,
            loaded: false,
        }
    }
}
