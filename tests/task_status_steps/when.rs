//! When steps for task status transition BDD scenarios.

use super::world::{TaskStatusWorld, parse_role, run_async};
use rstest_bdd_macros::when;
use taskboard::task::{
    domain::ApprovalDecision,
    services::{ResolveApprovalRequest, TransitionTaskRequest},
};

#[when(r#"the {role} moves the task to "{target}""#)]
fn role_moves_task(
    world: &mut TaskStatusWorld,
    role: String,
    target: String,
) -> Result<(), eyre::Report> {
    let member_role = parse_role(&role)?;
    let task_id = world.task()?.id();
    let result = run_async(
        world
            .service
            .transition_task(TransitionTaskRequest::new(task_id, target).with_role(member_role)),
    );
    world.last_result = Some(result);
    Ok(())
}

fn resolve(
    world: &mut TaskStatusWorld,
    role_name: &str,
    decision: ApprovalDecision,
) -> Result<(), eyre::Report> {
    let role = parse_role(role_name)?;
    let task_id = world.task()?.id();
    let result = run_async(
        world
            .service
            .resolve_approval(ResolveApprovalRequest::new(task_id, decision, role)),
    );
    world.last_result = Some(result);
    Ok(())
}

#[when("the {role} approves the task")]
fn role_approves_task(world: &mut TaskStatusWorld, role: String) -> Result<(), eyre::Report> {
    resolve(world, &role, ApprovalDecision::Approve)
}

#[when("the {role} requests changes on the task")]
fn role_requests_changes(world: &mut TaskStatusWorld, role: String) -> Result<(), eyre::Report> {
    resolve(world, &role, ApprovalDecision::RequestChanges)
}
