//! Which actions the detail page offers for a job.
//!
//! The API enforces the real transition rules; the GUI only hides buttons
//! that would certainly be rejected.

use crate::model::outcome::Outcome;
use crate::requests::JobAction;

/// Visibility of the detail page's action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JobControls {
    pub retry: bool,
    pub pause: bool,
}

impl JobControls {
    pub fn for_outcome(outcome: &Outcome) -> Self {
        Self {
            retry: can_retry(outcome),
            pause: can_pause(outcome),
        }
    }

    /// Actions to render, in button order.
    pub fn actions(&self) -> Vec<JobAction> {
        let mut actions = Vec::with_capacity(2);
        if self.retry {
            actions.push(JobAction::Retry);
        }
        if self.pause {
            actions.push(JobAction::Pause);
        }
        actions
    }
}

/// Jobs that are queued, in flight, finished well or asked for more work
/// cannot be retried.
pub fn can_retry(outcome: &Outcome) -> bool {
    !matches!(
        outcome,
        Outcome::Waiting | Outcome::Success | Outcome::Running | Outcome::MoreWork
    )
}

pub fn can_pause(outcome: &Outcome) -> bool {
    matches!(outcome, Outcome::Waiting | Outcome::Running)
}
