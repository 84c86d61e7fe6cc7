//! `planwright-scheduling` — working-day scheduling of project activities.
//!
//! The algorithmic core of planwright: given a project's activities, their
//! precedence edges, and an anchor date, compute a feasible start/end date
//! per activity. Pure and synchronous; persistence lives in
//! `planwright-infra`.
//!
//! Pipeline: [`ActivityGraph::build`] validates the flat activity list,
//! [`resolver::schedule`] propagates date constraints across predecessor
//! edges, and the resulting [`Schedule`] is handed to the caller.

pub mod activity;
pub mod calendar;
pub mod error;
pub mod graph;
pub mod resolver;

pub use activity::{Activity, ActivityId, DependencyType, ScheduledDates};
pub use error::SchedulingError;
pub use graph::ActivityGraph;
pub use resolver::{Schedule, schedule};
