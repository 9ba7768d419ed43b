/// Where `/api/*` is relayed to, shared across workers as `web::Data`.
#[derive(Clone)]
pub struct ApiUpstream {
    /// Base URL without a trailing `/`; `None` disables forwarding.
    pub base: Option<String>,
    pub client: reqwest::Client,
}

impl ApiUpstream {
    pub fn new(base: Option<String>) -> Self {
        Self {
            base,
            client: reqwest::Client::new(),
        }
    }

    /// Upstream URL for a request path such as `/api/jobs?page=2`.
    pub fn target_url(&self, path_and_query: &str) -> Option<String> {
        self.base
            .as_ref()
            .map(|base| format!("{}{}", base.trim_end_matches('/'), path_and_query))
    }
}
