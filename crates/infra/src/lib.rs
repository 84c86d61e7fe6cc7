//! `planwright-infra` — ports and orchestration around the scheduling core.
//!
//! The scheduling computation itself lives in `planwright-scheduling` and is
//! pure; this crate owns everything that touches the outside world: the
//! persistence port ([`ActivityStore`]), the write-back of computed dates
//! ([`emitter`]), and the `ScheduleProject` orchestration
//! ([`SchedulingService`]).

pub mod emitter;
pub mod service;
pub mod store;

pub use emitter::{FailedWrite, WriteReport};
pub use service::{ScheduleProjectError, ScheduleSummary, SchedulingService};
pub use store::{ActivityStore, InMemoryActivityStore, ProjectRecord, StoreError};
