//! In-memory activity graph with structural validation.

use std::collections::BTreeMap;

use crate::activity::{Activity, ActivityId};
use crate::error::SchedulingError;

/// Index of a project's activities keyed by id, with referential integrity
/// guaranteed: every predecessor id resolves to an activity in the graph.
///
/// Cycles are *not* ruled out here; the resolver detects them during
/// traversal so it can report the offending path.
#[derive(Debug, Clone)]
pub struct ActivityGraph {
    activities: BTreeMap<ActivityId, Activity>,
}

impl ActivityGraph {
    /// Build the graph from a flat activity list.
    ///
    /// Rejects zero durations, duplicate ids, and predecessors referencing
    /// unknown activities. Validation runs before any traversal so a
    /// malformed graph never produces a partial schedule.
    pub fn build(activities: Vec<Activity>) -> Result<Self, SchedulingError> {
        let mut index = BTreeMap::new();
        for activity in activities {
            if activity.duration_days == 0 {
                return Err(SchedulingError::InvalidDuration {
                    activity_id: activity.id,
                });
            }
            let id = activity.id;
            if index.insert(id, activity).is_some() {
                return Err(SchedulingError::DuplicateActivity { activity_id: id });
            }
        }

        for activity in index.values() {
            for predecessor_id in &activity.predecessors {
                if !index.contains_key(predecessor_id) {
                    return Err(SchedulingError::DanglingDependency {
                        activity_id: activity.id,
                        missing_predecessor_id: *predecessor_id,
                    });
                }
            }
        }

        Ok(Self { activities: index })
    }

    pub fn activity(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.get(&id)
    }

    /// Predecessors of `id`; empty for unknown ids.
    pub fn predecessors_of(&self, id: ActivityId) -> Vec<&Activity> {
        self.activity(id)
            .map(|a| {
                a.predecessors
                    .iter()
                    .filter_map(|p| self.activities.get(p))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All activities in id order.
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.activities.values()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planwright_core::AggregateId;

    fn test_id() -> ActivityId {
        ActivityId::new(AggregateId::new())
    }

    #[test]
    fn build_indexes_activities_by_id() {
        let a = Activity::new(test_id(), "A-010", "Groundwork", 5);
        let b = Activity::new(test_id(), "A-020", "Foundations", 3);
        let (a_id, b_id) = (a.id, b.id);

        let graph = ActivityGraph::build(vec![a, b]).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.activity(a_id).unwrap().code, "A-010");
        assert_eq!(graph.activity(b_id).unwrap().code, "A-020");
    }

    #[test]
    fn build_rejects_zero_duration() {
        let a = Activity::new(test_id(), "A-010", "Groundwork", 0);
        let a_id = a.id;

        let err = ActivityGraph::build(vec![a]).unwrap_err();
        assert_eq!(err, SchedulingError::InvalidDuration { activity_id: a_id });
    }

    #[test]
    fn build_rejects_duplicate_ids() {
        let id = test_id();
        let a = Activity::new(id, "A-010", "Groundwork", 5);
        let b = Activity::new(id, "A-020", "Foundations", 3);

        let err = ActivityGraph::build(vec![a, b]).unwrap_err();
        assert_eq!(err, SchedulingError::DuplicateActivity { activity_id: id });
    }

    #[test]
    fn build_rejects_dangling_predecessor() {
        let missing = test_id();
        let mut a = Activity::new(test_id(), "A-010", "Groundwork", 5);
        a.predecessors = vec![missing];
        let a_id = a.id;

        let err = ActivityGraph::build(vec![a]).unwrap_err();
        assert_eq!(
            err,
            SchedulingError::DanglingDependency {
                activity_id: a_id,
                missing_predecessor_id: missing,
            }
        );
    }

    #[test]
    fn predecessors_of_resolves_edges() {
        let a = Activity::new(test_id(), "A-010", "Groundwork", 5);
        let a_id = a.id;
        let mut b = Activity::new(test_id(), "A-020", "Foundations", 3);
        b.predecessors = vec![a_id];
        let b_id = b.id;

        let graph = ActivityGraph::build(vec![a, b]).unwrap();
        let preds = graph.predecessors_of(b_id);
        assert_eq!(preds.len(), 1);
        assert_eq!(preds[0].id, a_id);
        assert!(graph.predecessors_of(a_id).is_empty());
    }
}
