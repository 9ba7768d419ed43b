use common::requests::JobAction;
use common::view::JobDetail;

pub enum Msg {
    /// (Re)fetch the job and render it from scratch.
    Load,
    Loaded(JobDetail),
    Act(JobAction),
}
