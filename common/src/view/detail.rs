use crate::jobs::JobControls;
use crate::model::job::Job;
use serde_json::Value;

/// What the "response" panel of the detail page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePane {
    Json(Value),
    ErrorText(String),
    Empty,
}

/// Everything the detail page renders for one job.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDetail {
    pub job: Job,
    /// The job exactly as the API returned it, unknown fields included.
    pub raw: Value,
    pub controls: JobControls,
    pub response: ResponsePane,
}

impl JobDetail {
    pub fn from_value(raw: Value) -> Result<Self, serde_json::Error> {
        let job: Job = serde_json::from_value(raw.clone())?;
        let controls = JobControls::for_outcome(&job.outcome);
        let response = response_pane(&job);
        Ok(Self {
            job,
            raw,
            controls,
            response,
        })
    }

    pub fn request_body(&self) -> Value {
        self.job.request_body.clone().unwrap_or(Value::Null)
    }

    pub fn outcome_class(&self) -> &str {
        self.job.outcome.display_class()
    }
}

/// A result body wins over an error; falsy JSON values count as absent.
fn response_pane(job: &Job) -> ResponsePane {
    if let Some(result) = job.result_body.as_ref().filter(|v| is_truthy(v)) {
        return ResponsePane::Json(result.clone());
    }
    match job.error.as_ref().map(|error| error.display_text()) {
        Some(text) if !text.is_empty() => ResponsePane::ErrorText(text),
        _ => ResponsePane::Empty,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::JobAction;
    use serde_json::json;

    fn detail(extra: Value) -> JobDetail {
        let mut raw = json!({"job_id": "abc", "job_type": "ingest", "outcome": "error"});
        if let (Some(base), Some(extra)) = (raw.as_object_mut(), extra.as_object()) {
            for (k, v) in extra {
                base.insert(k.clone(), v.clone());
            }
        }
        JobDetail::from_value(raw).unwrap()
    }

    #[test]
    fn result_body_is_preferred_over_error() {
        let d = detail(json!({"result_body": {"rows": 1}, "error": "ignored"}));
        assert_eq!(d.response, ResponsePane::Json(json!({"rows": 1})));
    }

    #[test]
    fn falsy_result_falls_through_to_error() {
        let d = detail(json!({"result_body": "", "error": {"message": "boom", "stacktrace": "trace"}}));
        assert_eq!(d.response, ResponsePane::ErrorText("boom\n\ntrace".to_string()));

        let d = detail(json!({"result_body": 0, "error": "boom"}));
        assert_eq!(d.response, ResponsePane::ErrorText("boom".to_string()));
    }

    #[test]
    fn unknown_error_shape_is_shown_as_json() {
        let d = detail(json!({"error": {"stacktrace": "at x"}}));
        assert_eq!(d.response, ResponsePane::ErrorText(r#"{"stacktrace":"at x"}"#.to_string()));
        assert_eq!(d.controls.actions(), vec![JobAction::Retry]);
    }

    #[test]
    fn nothing_to_show() {
        assert_eq!(detail(json!({})).response, ResponsePane::Empty);
        assert_eq!(detail(json!({"error": ""})).response, ResponsePane::Empty);
    }

    #[test]
    fn raw_json_keeps_unknown_fields() {
        let d = detail(json!({"priority": 7}));
        assert_eq!(d.raw["priority"], json!(7));
        assert_eq!(d.request_body(), Value::Null);
    }

    #[test]
    fn controls_follow_outcome() {
        let d = detail(json!({}));
        assert_eq!(d.outcome_class(), "danger");
        assert_eq!(d.controls.actions(), vec![JobAction::Retry]);

        let d = detail(json!({"outcome": "waiting"}));
        assert_eq!(d.controls.actions(), vec![JobAction::Pause]);
    }

    #[test]
    fn malformed_job_is_an_error() {
        assert!(JobDetail::from_value(json!({"job_id": "abc"})).is_err());
    }
}
