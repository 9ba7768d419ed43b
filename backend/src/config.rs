//! Runtime configuration of the GUI host, read from `JOBBOARD_*` variables.

use log::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL of the jobs API that `/api/*` is forwarded to.
    pub api_upstream: Option<String>,
    /// Open the GUI in the default browser once the server is up.
    pub open_browser: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match non_empty("JOBBOARD_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Invalid JOBBOARD_PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            host: non_empty("JOBBOARD_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            api_upstream: non_empty("JOBBOARD_API_UPSTREAM").map(|url| url.trim_end_matches('/').to_string()),
            open_browser: non_empty("JOBBOARD_OPEN_BROWSER")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    /// Address of the jobs list served by this process.
    pub fn gui_url(&self) -> String {
        format!("http://{}:{}/jobs", self.host, self.port)
    }
}
