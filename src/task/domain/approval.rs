//! Admin decisions on tasks awaiting approval.

use crate::status::TaskStatus;
use serde::{Deserialize, Serialize};

/// Outcome chosen by an admin for a task in `pending-approval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalDecision {
    /// Accept the work and complete the task.
    Approve,
    /// Send the task back for more work.
    RequestChanges,
}

impl ApprovalDecision {
    /// Returns the status the task moves to for this decision.
    #[must_use]
    pub const fn target_status(self) -> TaskStatus {
        match self {
            Self::Approve => TaskStatus::Done,
            Self::RequestChanges => TaskStatus::ChangesRequested,
        }
    }
}
