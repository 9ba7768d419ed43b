use serde::{Deserialize, Serialize};
use std::fmt;

/// Actions the detail page can ask the jobs API to perform on a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobAction {
    Retry,
    Pause,
}

impl JobAction {
    pub fn as_str(self) -> &'static str {
        match self {
            JobAction::Retry => "retry",
            JobAction::Pause => "pause",
        }
    }
}

impl fmt::Display for JobAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies who is acting on a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub system_name: String,
    pub system_version: String,
    pub hostname: String,
}

impl Agent {
    /// The agent reported by the browser GUI, which knows neither its version
    /// nor the host it runs on.
    pub fn gui() -> Self {
        Self {
            system_name: "gui".to_string(),
            system_version: "?".to_string(),
            hostname: "?".to_string(),
        }
    }
}

/// Body of `POST /api/jobs/{job_id}?action=...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub agent: Agent,
}

impl ActionRequest {
    pub fn from_gui() -> Self {
        Self {
            agent: Agent::gui(),
        }
    }
}
