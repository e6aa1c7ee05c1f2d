//! Application services for task lifecycle orchestration.

mod board;
mod config;
mod lifecycle;

pub use board::{BoardColumn, TaskBoard};
pub use config::LifecycleConfig;
pub use lifecycle::{
    AppliedTransition, CreateTaskRequest, ResolveApprovalRequest, TaskLifecycleError,
    TaskLifecycleResult, TaskLifecycleService, TransitionTaskRequest,
};
