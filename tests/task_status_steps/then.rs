//! Then steps for task status transition BDD scenarios.

use super::world::{TaskStatusWorld, parse_role, run_async};
use rstest_bdd_macros::then;
use taskboard::{
    status::TaskStatus,
    task::{
        domain::TaskDomainError,
        services::{AppliedTransition, TaskLifecycleError},
    },
};

fn last_result(
    world: &TaskStatusWorld,
) -> Result<&Result<AppliedTransition, TaskLifecycleError>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))
}

fn applied(world: &TaskStatusWorld) -> Result<&AppliedTransition, eyre::Report> {
    last_result(world)?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected transition failure: {err}"))
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task_id = world.task()?.id();
    let stored = run_async(world.service.find_by_id(task_id))?
        .ok_or_else(|| eyre::eyre!("task {task_id} missing from repository"))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then("no approval is required")]
fn no_approval_required(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !applied(world)?.approval_required,
        "expected no approval requirement"
    );
    Ok(())
}

#[then("an approval is required")]
fn approval_required(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        applied(world)?.approval_required,
        "expected an approval requirement"
    );
    Ok(())
}

#[then("the transition fails with an admin-only status error")]
fn fails_with_admin_only(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    eyre::ensure!(
        matches!(
            result,
            Err(TaskLifecycleError::Domain(
                TaskDomainError::AdminOnlyStatus { .. }
            ))
        ),
        "expected AdminOnlyStatus error, got {result:?}"
    );
    Ok(())
}

#[then("the transition fails with an invalid status transition error")]
fn fails_with_invalid_transition(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    eyre::ensure!(
        matches!(
            result,
            Err(TaskLifecycleError::Domain(
                TaskDomainError::InvalidStatusTransition { .. }
            ))
        ),
        "expected InvalidStatusTransition error, got {result:?}"
    );
    Ok(())
}

#[then("the transition fails with an unknown status error")]
fn fails_with_unknown_status(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    eyre::ensure!(
        matches!(result, Err(TaskLifecycleError::InvalidStatus(_))),
        "expected InvalidStatus error, got {result:?}"
    );
    Ok(())
}

#[then("the transition fails with an approval privilege error")]
fn fails_with_approval_privilege(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    eyre::ensure!(
        matches!(
            result,
            Err(TaskLifecycleError::Domain(
                TaskDomainError::ApprovalRequiresPrivilege(_)
            ))
        ),
        "expected ApprovalRequiresPrivilege error, got {result:?}"
    );
    Ok(())
}

#[then(r#"the {role} is offered "{statuses}""#)]
fn role_is_offered(
    world: &TaskStatusWorld,
    role: String,
    statuses: String,
) -> Result<(), eyre::Report> {
    let member_role = parse_role(&role)?;
    let expected = statuses
        .split(',')
        .map(TaskStatus::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task_id = world.task()?.id();
    let offered = run_async(world.service.available_transitions(task_id, member_role))?;

    eyre::ensure!(
        offered == expected,
        "expected {expected:?} to be offered, got {offered:?}"
    );
    Ok(())
}

#[then("the task is no longer awaiting approval")]
fn not_awaiting_approval(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let pending = run_async(world.service.pending_approvals())?;
    eyre::ensure!(
        pending.iter().all(|task| task.id() != task_id),
        "task {task_id} is still pending approval"
    );
    Ok(())
}
