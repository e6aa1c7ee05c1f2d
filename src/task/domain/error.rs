//! Error types for task domain validation and parsing.

use super::TaskId;
use crate::status::TaskStatus;
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The requested status is not reachable from the current one.
    #[error("task {task_id} cannot transition from {from} to {to}")]
    InvalidStatusTransition {
        /// Task whose transition was rejected.
        task_id: TaskId,
        /// Status the task is currently in.
        from: TaskStatus,
        /// Status that was requested.
        to: TaskStatus,
    },

    /// Only a privileged member may move a task into the requested status.
    #[error("task {task_id} can only be moved to {status} by an admin")]
    AdminOnlyStatus {
        /// Task whose transition was rejected.
        task_id: TaskId,
        /// Admin-only target status.
        status: TaskStatus,
    },

    /// An approval decision was made for a task that is not awaiting one.
    #[error("task {task_id} is not awaiting approval (status: {status})")]
    NotAwaitingApproval {
        /// Task the decision was made for.
        task_id: TaskId,
        /// Status the task is currently in.
        status: TaskStatus,
    },

    /// Approval decisions are reserved for privileged members.
    #[error("only an admin may resolve the approval for task {0}")]
    ApprovalRequiresPrivilege(TaskId),
}

/// Error returned while parsing member roles.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown member role: {0}")]
pub struct ParseMemberRoleError(pub String);
