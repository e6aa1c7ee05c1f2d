//! Configuration for task lifecycle services.

use serde::{Deserialize, Serialize};

/// Limits applied when tasks are created.
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Maximum title length.
    pub max_title_length: usize,
    /// Maximum description length.
    pub max_description_length: usize,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            max_title_length: 200,
            max_description_length: 5_000,
        }
    }
}

impl LifecycleConfig {
    /// Creates a strict configuration with reduced limits.
    ///
    /// Suits compact mobile card layouts.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_title_length: 80,
            max_description_length: 1_000,
        }
    }
}
