//! Taskboard: task status lifecycle for a mobile task-management app.
//!
//! This crate provides the task lifecycle model consumed by admin
//! dashboards, approval queues, and kanban boards: which statuses exist,
//! which moves between them are legal, which of those a given role may be
//! offered, and which need an admin's approval.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`status`]: Static status registry and transition rules
//! - [`task`]: Task aggregate, approvals, and board orchestration

pub mod status;
pub mod task;
