//! `ScheduleProject` orchestration: load, compute, then commit.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use planwright_core::ProjectId;
use planwright_scheduling::{ActivityGraph, ActivityId, SchedulingError, schedule};

use crate::emitter::{self, FailedWrite};
use crate::store::{ActivityStore, StoreError};

/// Outcome of one scheduling run, including the partial-success write report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSummary {
    pub project_id: ProjectId,
    /// The anchor the run was computed from, normalized to a working day.
    pub project_start: NaiveDate,
    /// Number of activities with computed dates.
    pub scheduled: usize,
    /// Activities whose dates were persisted, in id order.
    pub updated: Vec<ActivityId>,
    /// Activities whose write-back failed; retryable individually.
    pub failed: Vec<FailedWrite>,
}

/// Failure of a scheduling run before any write was issued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleProjectError {
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// Structural error in the activity graph; corrupt input, no partial
    /// schedule is produced.
    #[error(transparent)]
    Validation(#[from] SchedulingError),

    /// Read-side store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Application service exposing the single `ScheduleProject` operation.
pub struct SchedulingService {
    store: Arc<dyn ActivityStore>,
}

impl SchedulingService {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self { store }
    }

    /// Recompute the full schedule of a project and persist it.
    ///
    /// Compute-then-commit: the graph is validated and every activity
    /// resolved before the first write is issued. Write failures are
    /// isolated per activity and reported in the summary rather than
    /// aborting the batch.
    pub async fn schedule_project(
        &self,
        project_id: ProjectId,
    ) -> Result<ScheduleSummary, ScheduleProjectError> {
        let project = self
            .store
            .project(project_id)
            .await?
            .ok_or(ScheduleProjectError::ProjectNotFound(project_id))?;
        let activities = self.store.activities(project_id).await?;

        let graph = ActivityGraph::build(activities)?;
        let computed = schedule(&graph, project.start_date)?;
        tracing::info!(
            %project_id,
            activities = computed.len(),
            project_start = %computed.project_start(),
            "schedule computed"
        );

        let report = emitter::write_back(self.store.clone(), project_id, &computed).await;
        if !report.is_complete() {
            tracing::warn!(
                %project_id,
                failed = report.failed.len(),
                "schedule write-back completed partially"
            );
        }

        Ok(ScheduleSummary {
            project_id,
            project_start: computed.project_start(),
            scheduled: computed.len(),
            updated: report.updated,
            failed: report.failed,
        })
    }
}
