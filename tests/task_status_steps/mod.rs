//! Step definitions for task status transition scenarios.

mod then;
mod when;
