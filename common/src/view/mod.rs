//! View models for the jobs table, the pager and the detail page.
//!
//! The frontend renders these field by field; keeping the mapping here means
//! the class/label rules are tested without a browser.

mod detail;
mod pager;
mod row;

pub use detail::{JobDetail, ResponsePane};
pub use pager::{pager_items, PagerItem};
pub use row::{job_rows, JobRow};
