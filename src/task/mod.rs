//! Task lifecycle management for taskboard.
//!
//! Tasks carry a current [`crate::status::TaskStatus`] and move through the
//! lifecycle only via the status registry: structural legality first, then
//! the admin-only gate on the target, then the approval signal handed back
//! to the caller. Admin approval decisions and the kanban board projection
//! sit on top of the same rules. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
