//! Paths of the jobs API endpoints used by the GUI.

use crate::requests::JobAction;

/// Base path of the jobs collection; also the filter form's `action`.
pub const JOBS_PATH: &str = "/api/jobs";

pub const JOB_TYPES_PATH: &str = "/api/metadata/job_types";

pub fn job_url(job_id: &str) -> String {
    format!("{}/{}", JOBS_PATH, job_id)
}

pub fn action_url(job_id: &str, action: JobAction) -> String {
    format!("{}?action={}", job_url(job_id), action)
}

/// Text shown in the blocking alert when an action is rejected.
pub fn action_failure_message(status_text: &str, body: &str) -> String {
    format!(
        "Error\n------------------------\nstatus:{}\nbody:\n{}",
        status_text, body
    )
}
