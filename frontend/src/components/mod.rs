pub mod job;
pub mod jobs;
pub mod json_view;
