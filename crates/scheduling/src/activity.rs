//! Activity model: the schedulable unit of work and its precedence metadata.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use planwright_core::AggregateId;

/// Activity identifier (project-scoped via the store; globally unique UUIDv7).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ActivityId(pub AggregateId);

impl ActivityId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ActivityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Precedence relationship between a predecessor's dates and this activity's.
///
/// Applied per activity, uniformly to all of its predecessor edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyType {
    /// Start after the predecessor finishes (the default).
    #[default]
    FinishToStart,
    /// Start together with the predecessor.
    StartToStart,
    /// Finish together with the predecessor.
    FinishToFinish,
    /// Finish when the predecessor starts.
    StartToFinish,
}

/// A schedulable unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    /// Short human-readable code (e.g. WBS code). Opaque to the scheduler.
    pub code: String,
    pub name: String,
    /// Working days the activity occupies. Zero is rejected at graph build.
    pub duration_days: u32,
    /// Activities this one depends on; may be empty, order irrelevant.
    pub predecessors: Vec<ActivityId>,
    pub dependency_type: DependencyType,
    /// Additional working days applied after the dependency-derived date.
    pub lag_days: u32,
}

impl Activity {
    /// A standalone activity with no predecessors and default dependency
    /// semantics. Predecessors and lag are set on the fields directly.
    pub fn new(
        id: ActivityId,
        code: impl Into<String>,
        name: impl Into<String>,
        duration_days: u32,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            duration_days,
            predecessors: Vec::new(),
            dependency_type: DependencyType::default(),
            lag_days: 0,
        }
    }
}

/// Computed start/end for one activity, both working days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledDates {
    pub start: NaiveDate,
    pub end: NaiveDate,
}
