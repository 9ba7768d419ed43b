use crate::model::outcome::Outcome;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A job as returned by `GET /api/jobs` and `GET /api/jobs/{job_id}`.
///
/// The GUI only ever reads jobs; every field the API may leave out before the
/// corresponding lifecycle stage is optional. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: String,
    pub job_type: String,
    pub outcome: Outcome,
    #[serde(default)]
    pub request_body: Option<Value>,
    #[serde(default)]
    pub result_body: Option<Value>,
    #[serde(default)]
    pub error: Option<JobError>,
    #[serde(default)]
    pub job_created: Option<String>,
    #[serde(default)]
    pub contract_claimed: Option<String>,
    #[serde(default)]
    pub contract_finished: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Failure details attached to a job.
///
/// Depending on the API version this is either a bare message or an object
/// carrying the message and the worker's stack trace. Any other shape is kept
/// as raw JSON so one odd job never fails a whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobError {
    Message(String),
    Structured {
        message: String,
        #[serde(default)]
        stacktrace: Option<String>,
    },
    Other(Value),
}

impl JobError {
    /// The error message, when the API sent one in a known shape.
    pub fn message(&self) -> Option<&str> {
        match self {
            JobError::Message(message) => Some(message.as_str()),
            JobError::Structured { message, .. } => Some(message.as_str()),
            JobError::Other(_) => None,
        }
    }

    /// Text shown in the read-only error box on the detail page.
    pub fn display_text(&self) -> String {
        match self {
            JobError::Message(message) => message.clone(),
            JobError::Structured {
                message,
                stacktrace: Some(trace),
            } if !trace.is_empty() => format!("{}\n\n{}", message, trace),
            JobError::Structured { message, .. } => message.clone(),
            JobError::Other(raw) => raw.to_string(),
        }
    }
}

impl Job {
    /// Href of this job's detail page.
    pub fn detail_href(&self) -> String {
        format!("/jobs/{}", self.job_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::page::PageEnvelope;
    use serde_json::json;

    #[test]
    fn minimal_job_parses_with_missing_lifecycle_fields() {
        let job: Job = serde_json::from_value(json!({
            "job_id": "abc",
            "job_type": "ingest",
            "outcome": "waiting",
            "some_future_field": 42
        }))
        .unwrap();

        assert_eq!(job.outcome, Outcome::Waiting);
        assert_eq!(job.contract_claimed, None);
        assert_eq!(job.error, None);
        assert_eq!(job.detail_href(), "/jobs/abc");
    }

    #[test]
    fn error_accepts_both_shapes() {
        let plain: JobError = serde_json::from_value(json!("boom")).unwrap();
        assert_eq!(plain, JobError::Message("boom".to_string()));
        assert_eq!(plain.display_text(), "boom");

        let structured: JobError = serde_json::from_value(json!({
            "message": "boom",
            "stacktrace": "at worker.run"
        }))
        .unwrap();
        assert_eq!(structured.message(), Some("boom"));
        assert_eq!(structured.display_text(), "boom\n\nat worker.run");
    }

    #[test]
    fn unexpected_error_shape_keeps_the_page_readable() {
        let page: PageEnvelope = serde_json::from_value(json!({
            "data": [
                {"job_id": "a", "job_type": "ingest", "outcome": "success"},
                {"job_id": "b", "job_type": "ingest", "outcome": "error",
                 "error": {"stacktrace": "at x"}},
                {"job_id": "c", "job_type": "ingest", "outcome": "error", "error": 17}
            ],
            "paging": {"page": 1, "pages": ["1"]}
        }))
        .unwrap();

        assert_eq!(page.data.len(), 3);
        let odd = page.data[1].error.as_ref().unwrap();
        assert_eq!(odd.message(), None);
        assert_eq!(odd.display_text(), r#"{"stacktrace":"at x"}"#);
        assert_eq!(page.data[2].error.as_ref().unwrap().display_text(), "17");
    }

    #[test]
    fn null_error_is_treated_as_absent() {
        let job: Job = serde_json::from_value(json!({
            "job_id": "abc",
            "job_type": "ingest",
            "outcome": "success",
            "error": null,
            "result_body": {"rows": 3}
        }))
        .unwrap();

        assert_eq!(job.error, None);
        assert_eq!(job.result_body, Some(json!({"rows": 3})));
    }
}
