use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a job as reported by the jobs API.
///
/// The API owns this vocabulary and may grow it at any time, so anything the
/// GUI has no special handling for is kept verbatim in `Other` and written
/// back out unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Outcome {
    Waiting,
    Running,
    Success,
    Error,
    Cancelled,
    MoreWork,
    Other(String),
}

impl Outcome {
    /// Outcomes offered by the status filter, in display order.
    pub const KNOWN: [Outcome; 6] = [
        Outcome::Waiting,
        Outcome::Running,
        Outcome::Success,
        Outcome::Error,
        Outcome::Cancelled,
        Outcome::MoreWork,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Outcome::Waiting => "waiting",
            Outcome::Running => "running",
            Outcome::Success => "success",
            Outcome::Error => "error",
            Outcome::Cancelled => "cancelled",
            Outcome::MoreWork => "more-work",
            Outcome::Other(raw) => raw,
        }
    }

    /// CSS class used for table rows and the detail header.
    ///
    /// Only a handful of outcomes have a dedicated class; every other value
    /// (`waiting` included) is used as its own class name.
    pub fn display_class(&self) -> &str {
        match self {
            Outcome::Success => "success",
            Outcome::Error => "danger",
            Outcome::Running => "info",
            Outcome::Cancelled => "warning",
            other => other.as_str(),
        }
    }
}

impl From<&str> for Outcome {
    fn from(raw: &str) -> Self {
        match raw {
            "waiting" => Outcome::Waiting,
            "running" => Outcome::Running,
            "success" => Outcome::Success,
            "error" => Outcome::Error,
            "cancelled" => Outcome::Cancelled,
            "more-work" => Outcome::MoreWork,
            other => Outcome::Other(other.to_string()),
        }
    }
}

impl From<String> for Outcome {
    fn from(raw: String) -> Self {
        match Outcome::from(raw.as_str()) {
            Outcome::Other(_) => Outcome::Other(raw),
            known => known,
        }
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
