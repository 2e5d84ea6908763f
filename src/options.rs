//! Planner configuration.

use serde::{Deserialize, Serialize};

/// What happens to existing assignments when deliveries are assigned again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentMode {
    /// Keep loads and delivery mappings from earlier passes and add onto them.
    #[default]
    Accumulate,
    /// Clear every vehicle before assigning.
    Fresh,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerOptions {
    /// Mode used by [`crate::session::Session::assign_deliveries`].
    pub assignment_mode: AssignmentMode,
    /// Build per-vehicle routes on the rayon pool.
    pub parallel_routes: bool,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            assignment_mode: AssignmentMode::Accumulate,
            parallel_routes: false,
        }
    }
}
