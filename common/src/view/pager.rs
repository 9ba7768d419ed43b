use crate::model::page::Paging;

/// One pager link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerItem {
    /// 1-based page number, also the link label.
    pub num: u32,
    pub active: bool,
}

impl PagerItem {
    pub fn class_name(&self) -> &'static str {
        if self.active {
            "active"
        } else {
            ""
        }
    }
}

/// One item per entry of `paging.pages`; the item numbered `paging.page` is
/// active. An out-of-range current page leaves every item inactive.
pub fn pager_items(paging: &Paging) -> Vec<PagerItem> {
    (1..=paging.page_count() as u32)
        .map(|num| PagerItem {
            num,
            active: num == paging.page,
        })
        .collect()
}
