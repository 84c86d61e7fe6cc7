//! Scheduling error taxonomy.
//!
//! All of these are structural input errors and abort the scheduling run
//! before any write-back; a partial schedule is never produced.

use thiserror::Error;

use crate::activity::ActivityId;

/// Fatal errors raised while validating or resolving an activity graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    /// The predecessor relation loops back on itself.
    ///
    /// `path` is the chain of activity ids on the resolution stack, from
    /// the first occurrence of the offending activity back to itself.
    #[error("dependency cycle detected: {}", fmt_path(.path))]
    CycleDetected { path: Vec<ActivityId> },

    /// An activity references a predecessor that does not exist.
    #[error("activity {activity_id} references unknown predecessor {missing_predecessor_id}")]
    DanglingDependency {
        activity_id: ActivityId,
        missing_predecessor_id: ActivityId,
    },

    /// `duration_days` must be a positive number of working days.
    #[error("activity {activity_id} has invalid duration (duration_days must be positive)")]
    InvalidDuration { activity_id: ActivityId },

    /// Two activities in the same project share an id.
    #[error("duplicate activity id {activity_id}")]
    DuplicateActivity { activity_id: ActivityId },
}

fn fmt_path(path: &[ActivityId]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
