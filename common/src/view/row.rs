use crate::format::{format_day, format_time};
use crate::model::job::Job;
use chrono::TimeZone;

/// One rendered row of the jobs table.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRow {
    pub link_text: String,
    pub link_href: String,
    pub notes: String,
    pub created_date: String,
    pub created_time: String,
    pub started_time: String,
    pub finished_time: String,
    pub status: String,
    pub row_class: String,
}

impl JobRow {
    pub fn new<Tz: TimeZone>(job: &Job, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let created = job.job_created.as_deref();
        Self {
            link_text: job.job_type.clone(),
            link_href: job.detail_href(),
            notes: job.notes.clone().unwrap_or_default(),
            created_date: format_day(created, tz),
            created_time: format_time(created, tz),
            started_time: format_time(job.contract_claimed.as_deref(), tz),
            finished_time: format_time(job.contract_finished.as_deref(), tz),
            status: job.outcome.to_string(),
            row_class: job.outcome.display_class().to_string(),
        }
    }
}

/// Rows for a page of jobs, in response order.
pub fn job_rows<Tz: TimeZone>(jobs: &[Job], tz: &Tz) -> Vec<JobRow>
where
    Tz::Offset: std::fmt::Display,
{
    jobs.iter().map(|job| JobRow::new(job, tz)).collect()
}
