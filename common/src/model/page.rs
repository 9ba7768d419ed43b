use crate::model::job::Job;
use serde::{Deserialize, Serialize};

/// Response of `GET /api/jobs`: one page of jobs and the pager metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope {
    pub data: Vec<Job>,
    pub paging: Paging,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paging {
    /// 1-based number of the page in `data`.
    pub page: u32,
    /// One entry per page; only the length matters to the GUI.
    #[serde(default)]
    pub pages: Vec<String>,
}

impl Paging {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
