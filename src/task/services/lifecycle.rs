//! Service layer for task creation, status transitions, and approvals.

use super::{LifecycleConfig, TaskBoard};
use crate::{
    status::{ParseTaskStatusError, TaskStatus},
    task::{
        domain::{
            ApprovalDecision, MemberRole, StatusChange, Task, TaskDomainError, TaskId, TaskTitle,
        },
        ports::{TaskRepository, TaskRepositoryError},
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for moving a task to another status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTaskRequest {
    task_id: TaskId,
    target_status: String,
    role: MemberRole,
}

impl TransitionTaskRequest {
    /// Creates a transition request made by a regular member.
    ///
    /// The target status is parsed when the request is handled so callers
    /// can pass raw UI values through.
    #[must_use]
    pub fn new(task_id: TaskId, target_status: impl Into<String>) -> Self {
        Self {
            task_id,
            target_status: target_status.into(),
            role: MemberRole::Member,
        }
    }

    /// Sets the role the transition is made under.
    #[must_use]
    pub const fn with_role(mut self, role: MemberRole) -> Self {
        self.role = role;
        self
    }
}

/// Request payload for an admin approval decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveApprovalRequest {
    task_id: TaskId,
    decision: ApprovalDecision,
    role: MemberRole,
}

impl ResolveApprovalRequest {
    /// Creates an approval decision made under `role`.
    #[must_use]
    pub const fn new(task_id: TaskId, decision: ApprovalDecision, role: MemberRole) -> Self {
        Self {
            task_id,
            decision,
            role,
        }
    }
}

/// Outcome of a successfully applied transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedTransition {
    /// Task after the transition was persisted.
    pub task: Task,
    /// Whether the workflow must collect an approval for this change.
    ///
    /// Advisory only; the transition has already been persisted.
    pub approval_required: bool,
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// The requested status string is not a known status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The title exceeds the configured limit.
    #[error("task title has {length} characters, limit is {max}")]
    TitleTooLong {
        /// Title length in characters.
        length: usize,
        /// Configured limit.
        max: usize,
    },
    /// The description exceeds the configured limit.
    #[error("task description has {length} characters, limit is {max}")]
    DescriptionTooLong {
        /// Description length in characters.
        length: usize,
        /// Configured limit.
        max: usize,
    },
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: LifecycleConfig,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service with default limits.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            config: LifecycleConfig::default(),
        }
    }

    /// Replaces the service configuration.
    #[must_use]
    pub const fn with_config(mut self, config: LifecycleConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    /// Creates a task in [`TaskStatus::New`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the title is blank, a length limit
    /// is exceeded, or the repository rejects persistence.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let title_length = title.as_str().chars().count();
        if title_length > self.config.max_title_length {
            return Err(TaskLifecycleError::TitleTooLong {
                length: title_length,
                max: self.config.max_title_length,
            });
        }
        if let Some(description) = request.description.as_deref() {
            let length = description.chars().count();
            if length > self.config.max_description_length {
                return Err(TaskLifecycleError::DescriptionTooLong {
                    length,
                    max: self.config.max_description_length,
                });
            }
        }

        let task = Task::new(title, request.description, &*self.clock);
        self.repository.store(&task).await?;
        tracing::info!(task_id = %task.id(), status = %task.status(), "task created");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, task_id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(task_id).await?)
    }

    /// Returns the statuses a member with `role` may move the task to.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist.
    pub async fn available_transitions(
        &self,
        task_id: TaskId,
        role: MemberRole,
    ) -> TaskLifecycleResult<Vec<TaskStatus>> {
        let task = self.load(task_id).await?;
        Ok(task.available_transitions(role))
    }

    /// Moves a task to the requested status.
    ///
    /// The new status is committed as soon as the move is legal and
    /// permitted. `approval_required` in the result is advisory: the service
    /// does not hold the task back or queue it, so a task completed straight
    /// from `in-progress` lands in `done` and never appears in
    /// [`Self::pending_approvals`]. Callers that must collect that approval
    /// first should route the task through `pending-approval` instead.
    ///
    /// If another request changed the task after it was read, nothing is
    /// written and the call fails with [`TaskRepositoryError::Conflict`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::InvalidStatus`] for an unknown status
    /// string, [`TaskLifecycleError::NotFound`] for an unknown task,
    /// [`TaskLifecycleError::Domain`] when the transition is illegal or not
    /// permitted for the role, or [`TaskLifecycleError::Repository`] when
    /// persistence fails.
    pub async fn transition_task(
        &self,
        request: TransitionTaskRequest,
    ) -> TaskLifecycleResult<AppliedTransition> {
        let target = TaskStatus::try_from(request.target_status.as_str())?;
        let loaded = self.load(request.task_id).await?;
        let mut task = loaded.clone();
        let change = task
            .transition_to(target, request.role, &*self.clock)
            .inspect_err(|err| {
                tracing::debug!(
                    task_id = %request.task_id,
                    role = %request.role,
                    to = %target,
                    error = %err,
                    "task transition rejected"
                );
            })?;
        self.persist(task, &loaded, change, "task status transitioned").await
    }

    /// Applies an admin decision to a task awaiting approval.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for an unknown task,
    /// [`TaskLifecycleError::Domain`] when the role is not privileged or the
    /// task is not pending approval, or [`TaskLifecycleError::Repository`]
    /// when persistence fails.
    pub async fn resolve_approval(
        &self,
        request: ResolveApprovalRequest,
    ) -> TaskLifecycleResult<AppliedTransition> {
        let loaded = self.load(request.task_id).await?;
        let mut task = loaded.clone();
        let change = task.resolve_approval(request.decision, request.role, &*self.clock)?;
        self.persist(task, &loaded, change, "task approval resolved").await
    }

    /// Returns the tasks awaiting an approval decision, in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn pending_approvals(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self
            .repository
            .find_by_status(TaskStatus::PendingApproval)
            .await?)
    }

    /// Builds the kanban board for every stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn board(&self) -> TaskLifecycleResult<TaskBoard> {
        let tasks = self.repository.list().await?;
        Ok(TaskBoard::from_tasks(tasks))
    }

    async fn load(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))
    }

    async fn persist(
        &self,
        task: Task,
        loaded: &Task,
        change: StatusChange,
        message: &'static str,
    ) -> TaskLifecycleResult<AppliedTransition> {
        self.repository
            .update(&task, loaded)
            .await
            .inspect_err(|err| {
                tracing::debug!(
                    task_id = %task.id(),
                    from = %change.from,
                    to = %change.to,
                    error = %err,
                    "task update refused"
                );
            })?;
        tracing::info!(
            task_id = %task.id(),
            from = %change.from,
            to = %change.to,
            approval_required = change.approval_required,
            "{message}"
        );
        Ok(AppliedTransition {
            task,
            approval_required: change.approval_required,
        })
    }
}
