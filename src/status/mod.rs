//! Task status lifecycle model.
//!
//! A static registry of the five task lifecycle states, the transitions
//! each one permits, and the role-gating rules that decide which of those
//! transitions a caller may be offered. Everything here is pure: the
//! registry lives in immutable statics and every query is a total function
//! over [`TaskStatus`].
//!
//! ```text
//! new               -> in-progress
//! in-progress       -> pending-approval, done, new
//! pending-approval  -> done, changes-requested, in-progress   (admin-only to enter)
//! changes-requested -> in-progress, pending-approval
//! done              -> in-progress                            (admin-only to enter)
//! ```
//!
//! Callers holding raw strings convert them with [`TaskStatus::try_from`]
//! or [`str::parse`], which reject anything outside the five identities.

mod definition;
mod error;
mod task_status;

pub use definition::StatusDefinition;
pub use error::ParseTaskStatusError;
pub use task_status::TaskStatus;
