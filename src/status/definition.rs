//! Static status definitions backing the lifecycle registry.

use super::TaskStatus;
use serde::Serialize;

/// Immutable metadata and transition rules for one [`TaskStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDefinition {
    id: TaskStatus,
    label: &'static str,
    description: &'static str,
    allowed_transitions: &'static [TaskStatus],
    requires_approval: bool,
    admin_only: bool,
}

impl StatusDefinition {
    /// Returns the status this definition describes.
    #[must_use]
    pub const fn id(&self) -> TaskStatus {
        self.id
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Returns the statuses reachable directly from this one.
    ///
    /// The order is the order in which actions are presented to users.
    #[must_use]
    pub const fn allowed_transitions(&self) -> &'static [TaskStatus] {
        self.allowed_transitions
    }

    /// Returns whether entering this status needs admin sign-off.
    #[must_use]
    pub const fn requires_approval(&self) -> bool {
        self.requires_approval
    }

    /// Returns whether only a privileged role may move a task into this status.
    #[must_use]
    pub const fn admin_only(&self) -> bool {
        self.admin_only
    }
}

pub(super) static NEW: StatusDefinition = StatusDefinition {
    id: TaskStatus::New,
    label: "New",
    description: "Task has been created but work has not started.",
    allowed_transitions: &[TaskStatus::InProgress],
    requires_approval: false,
    admin_only: false,
};

pub(super) static IN_PROGRESS: StatusDefinition = StatusDefinition {
    id: TaskStatus::InProgress,
    label: "In Progress",
    description: "Task is actively being worked on.",
    allowed_transitions: &[
        TaskStatus::PendingApproval,
        TaskStatus::Done,
        TaskStatus::New,
    ],
    requires_approval: false,
    admin_only: false,
};

pub(super) static PENDING_APPROVAL: StatusDefinition = StatusDefinition {
    id: TaskStatus::PendingApproval,
    label: "Pending Approval",
    description: "Task is waiting for an admin to sign off on the work.",
    allowed_transitions: &[
        TaskStatus::Done,
        TaskStatus::ChangesRequested,
        TaskStatus::InProgress,
    ],
    requires_approval: true,
    admin_only: true,
};

pub(super) static CHANGES_REQUESTED: StatusDefinition = StatusDefinition {
    id: TaskStatus::ChangesRequested,
    label: "Changes Requested",
    description: "Reviewer asked for changes before the task can be approved.",
    allowed_transitions: &[TaskStatus::InProgress, TaskStatus::PendingApproval],
    requires_approval: false,
    admin_only: false,
};

pub(super) static DONE: StatusDefinition = StatusDefinition {
    id: TaskStatus::Done,
    label: "Done",
    description: "Task is complete. It can be reopened if more work is needed.",
    allowed_transitions: &[TaskStatus::InProgress],
    requires_approval: false,
    admin_only: true,
};
