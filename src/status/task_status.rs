//! Task lifecycle status and its registry queries.

use super::{ParseTaskStatusError, StatusDefinition, definition};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    New,
    /// Task is being worked on.
    InProgress,
    /// Task is awaiting admin sign-off.
    PendingApproval,
    /// Reviewer sent the task back for more work.
    ChangesRequested,
    /// Task has been completed.
    Done,
}

impl TaskStatus {
    /// Every status, in board column order.
    pub const ALL: [Self; 5] = [
        Self::New,
        Self::InProgress,
        Self::PendingApproval,
        Self::ChangesRequested,
        Self::Done,
    ];

    /// Returns the canonical string identity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in-progress",
            Self::PendingApproval => "pending-approval",
            Self::ChangesRequested => "changes-requested",
            Self::Done => "done",
        }
    }

    /// Returns the static definition for this status.
    #[must_use]
    pub const fn definition(self) -> &'static StatusDefinition {
        match self {
            Self::New => &definition::NEW,
            Self::InProgress => &definition::IN_PROGRESS,
            Self::PendingApproval => &definition::PENDING_APPROVAL,
            Self::ChangesRequested => &definition::CHANGES_REQUESTED,
            Self::Done => &definition::DONE,
        }
    }

    /// Returns whether `target` is directly reachable from this status.
    ///
    /// This is the structural check only; it ignores who is asking.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self.definition().allowed_transitions().contains(&target)
    }

    /// Returns the transitions that may be offered to a caller.
    ///
    /// Unprivileged callers lose every target whose own definition is
    /// admin-only. The result keeps the registry order.
    #[must_use]
    pub fn available_transitions(self, is_privileged: bool) -> Vec<Self> {
        self.definition()
            .allowed_transitions()
            .iter()
            .copied()
            .filter(|target| is_privileged || !target.definition().admin_only())
            .collect()
    }

    /// Returns whether moving from this status to `target` needs approval.
    ///
    /// Structural legality is not checked here; call
    /// [`TaskStatus::can_transition_to`] first.
    #[must_use]
    pub const fn requires_approval_to_transition(self, target: Self) -> bool {
        // Completing straight from in-progress is gated even though `done`
        // itself carries no approval flag.
        target.definition().requires_approval()
            || matches!((self, target), (Self::InProgress, Self::Done))
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "new" => Ok(Self::New),
            "in-progress" => Ok(Self::InProgress),
            "pending-approval" => Ok(Self::PendingApproval),
            "changes-requested" => Ok(Self::ChangesRequested),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
