//! Dependency resolver: constraint propagation over the activity graph.
//!
//! Depth-first resolution of each activity's start/end date from its
//! predecessors. All resolution state lives in a [`ScheduleContext`] value
//! threaded through the calls, so a run is a pure function of the graph and
//! the anchor date: re-running on unchanged input yields identical output.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use crate::activity::{Activity, ActivityId, DependencyType, ScheduledDates};
use crate::calendar;
use crate::error::SchedulingError;
use crate::graph::ActivityGraph;

/// Immutable result of a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    project_start: NaiveDate,
    dates: BTreeMap<ActivityId, ScheduledDates>,
}

impl Schedule {
    /// The normalized anchor date the run was computed from.
    pub fn project_start(&self) -> NaiveDate {
        self.project_start
    }

    pub fn get(&self, id: ActivityId) -> Option<ScheduledDates> {
        self.dates.get(&id).copied()
    }

    /// All computed dates in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ActivityId, ScheduledDates)> + '_ {
        self.dates.iter().map(|(id, dates)| (*id, *dates))
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Per-run resolution state: memoized results plus cycle bookkeeping.
///
/// An activity is in exactly one of three states: unvisited (in neither
/// collection), in progress (in `visiting`), or resolved (in `resolved`).
struct ScheduleContext {
    resolved: BTreeMap<ActivityId, ScheduledDates>,
    visiting: HashSet<ActivityId>,
    /// Resolution stack, used to report the offending chain on a cycle.
    stack: Vec<ActivityId>,
}

impl ScheduleContext {
    fn new() -> Self {
        Self {
            resolved: BTreeMap::new(),
            visiting: HashSet::new(),
            stack: Vec::new(),
        }
    }

    fn cycle_path(&self, id: ActivityId) -> Vec<ActivityId> {
        let from = self.stack.iter().position(|s| *s == id).unwrap_or(0);
        let mut path = self.stack[from..].to_vec();
        path.push(id);
        path
    }
}

/// Compute a [`Schedule`] for every activity in `graph`.
///
/// `project_start` anchors activities without predecessors; a weekend
/// anchor is rolled forward to the next working day first. Fails without
/// producing any result on a cyclic graph.
pub fn schedule(
    graph: &ActivityGraph,
    project_start: NaiveDate,
) -> Result<Schedule, SchedulingError> {
    let anchor = calendar::next_working_day(project_start);
    let mut ctx = ScheduleContext::new();

    // Visit order does not matter: memoization resolves each activity once.
    for activity in graph.activities() {
        resolve(graph, anchor, activity, &mut ctx)?;
    }

    Ok(Schedule {
        project_start: anchor,
        dates: ctx.resolved,
    })
}

fn resolve(
    graph: &ActivityGraph,
    anchor: NaiveDate,
    activity: &Activity,
    ctx: &mut ScheduleContext,
) -> Result<ScheduledDates, SchedulingError> {
    if let Some(dates) = ctx.resolved.get(&activity.id) {
        return Ok(*dates);
    }
    if ctx.visiting.contains(&activity.id) {
        return Err(SchedulingError::CycleDetected {
            path: ctx.cycle_path(activity.id),
        });
    }

    ctx.visiting.insert(activity.id);
    ctx.stack.push(activity.id);

    let mut base_start = anchor;
    for predecessor_id in &activity.predecessors {
        let predecessor = graph.activity(*predecessor_id).ok_or_else(|| {
            SchedulingError::DanglingDependency {
                activity_id: activity.id,
                missing_predecessor_id: *predecessor_id,
            }
        })?;
        let predecessor_dates = resolve(graph, anchor, predecessor, ctx)?;

        let mut candidate = dependent_start(activity, predecessor_dates);
        candidate = calendar::advance(candidate, i64::from(activity.lag_days));

        // Latest constraint wins across predecessors.
        if candidate > base_start {
            base_start = candidate;
        }
    }

    let dates = ScheduledDates {
        start: base_start,
        end: calendar::advance(base_start, i64::from(activity.duration_days) - 1),
    };

    ctx.stack.pop();
    ctx.visiting.remove(&activity.id);
    ctx.resolved.insert(activity.id, dates);

    Ok(dates)
}

/// Candidate start for `activity` implied by one resolved predecessor.
fn dependent_start(activity: &Activity, predecessor: ScheduledDates) -> NaiveDate {
    let back_span = -(i64::from(activity.duration_days) - 1);
    match activity.dependency_type {
        DependencyType::FinishToStart => calendar::advance(predecessor.end, 1),
        DependencyType::StartToStart => predecessor.start,
        // Back-compute the start putting this activity's end on the
        // predecessor's end (or start, for start_to_finish).
        DependencyType::FinishToFinish => calendar::advance(predecessor.end, back_span),
        DependencyType::StartToFinish => calendar::advance(predecessor.start, back_span),
    }
}
