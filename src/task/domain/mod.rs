//! Domain model for task lifecycle management.
//!
//! The task aggregate owns the mutable current status and consults the
//! static [`crate::status`] registry for every change. Member roles decide
//! which admin-only statuses a caller may move a task into.

mod approval;
mod error;
mod ids;
mod role;
mod task;

pub use approval::ApprovalDecision;
pub use error::{ParseMemberRoleError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use role::MemberRole;
pub use task::{PersistedTaskData, StatusChange, Task};
