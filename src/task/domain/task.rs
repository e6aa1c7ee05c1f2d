//! Task aggregate root and related lifecycle types.

use super::{ApprovalDecision, MemberRole, TaskDomainError, TaskId, TaskTitle};
use crate::status::TaskStatus;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Record of a status change applied to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    /// Status before the change.
    pub from: TaskStatus,
    /// Status after the change.
    pub to: TaskStatus,
    /// Whether the surrounding workflow must collect an approval for it.
    pub approval_required: bool,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in [`TaskStatus::New`].
    #[must_use]
    pub fn new(title: TaskTitle, description: Option<String>, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title,
            description,
            status: TaskStatus::New,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the statuses a member with `role` may move this task to.
    #[must_use]
    pub fn available_transitions(&self, role: MemberRole) -> Vec<TaskStatus> {
        self.status.available_transitions(role.is_privileged())
    }

    /// Moves the task to `target` on behalf of a member with `role`.
    ///
    /// The task is left untouched when the change is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when `target` is
    /// not reachable from the current status, or
    /// [`TaskDomainError::AdminOnlyStatus`] when `target` is admin-only and
    /// `role` is not privileged.
    pub fn transition_to(
        &mut self,
        target: TaskStatus,
        role: MemberRole,
        clock: &impl Clock,
    ) -> Result<StatusChange, TaskDomainError> {
        let from = self.status;
        if !from.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStatusTransition {
                task_id: self.id,
                from,
                to: target,
            });
        }
        if target.definition().admin_only() && !role.is_privileged() {
            return Err(TaskDomainError::AdminOnlyStatus {
                task_id: self.id,
                status: target,
            });
        }

        self.status = target;
        self.touch(clock);
        Ok(StatusChange {
            from,
            to: target,
            approval_required: from.requires_approval_to_transition(target),
        })
    }

    /// Applies an admin decision to a task awaiting approval.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ApprovalRequiresPrivilege`] when `role` is
    /// not privileged, or [`TaskDomainError::NotAwaitingApproval`] when the
    /// task is not in [`TaskStatus::PendingApproval`].
    pub fn resolve_approval(
        &mut self,
        decision: ApprovalDecision,
        role: MemberRole,
        clock: &impl Clock,
    ) -> Result<StatusChange, TaskDomainError> {
        if !role.is_privileged() {
            return Err(TaskDomainError::ApprovalRequiresPrivilege(self.id));
        }
        if self.status != TaskStatus::PendingApproval {
            return Err(TaskDomainError::NotAwaitingApproval {
                task_id: self.id,
                status: self.status,
            });
        }
        self.transition_to(decision.target_status(), role, clock)
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
