use common::model::page::PageEnvelope;

pub enum Msg {
    /// Request the given page under the filter form's current values.
    Fetch(u32),
    JobsLoaded(PageEnvelope),
    JobTypesLoaded(Vec<String>),
    /// A filter changed; start over at page 1.
    FilterChanged,
}
