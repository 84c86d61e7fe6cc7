//! Write-back of computed schedules to the persistence port.
//!
//! Each activity's dates are persisted by an independent update; the batch
//! has no internal ordering and a failed write never blocks or rolls back
//! the others. Callers must fully validate the schedule before invoking
//! this module (compute-then-commit).

use std::sync::Arc;

use serde::Serialize;

use planwright_core::ProjectId;
use planwright_scheduling::{ActivityId, Schedule};

use crate::store::ActivityStore;

/// One activity whose date write-back failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedWrite {
    pub activity_id: ActivityId,
    pub reason: String,
}

/// Partial-success report of a write-back batch, in activity-id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteReport {
    pub updated: Vec<ActivityId>,
    pub failed: Vec<FailedWrite>,
}

impl WriteReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Persist every activity's computed dates, one concurrent update each.
pub async fn write_back(
    store: Arc<dyn ActivityStore>,
    project_id: ProjectId,
    schedule: &Schedule,
) -> WriteReport {
    let handles: Vec<_> = schedule
        .iter()
        .map(|(activity_id, dates)| {
            let store = store.clone();
            let handle = tokio::spawn(async move {
                store
                    .update_planned_dates(project_id, activity_id, dates)
                    .await
            });
            (activity_id, handle)
        })
        .collect();

    let mut updated = Vec::new();
    let mut failed = Vec::new();
    for (activity_id, handle) in handles {
        match handle.await {
            Ok(Ok(())) => updated.push(activity_id),
            Ok(Err(err)) => {
                tracing::warn!(%project_id, %activity_id, error = %err, "schedule write-back failed");
                failed.push(FailedWrite {
                    activity_id,
                    reason: err.to_string(),
                });
            }
            Err(join_err) => {
                tracing::error!(%project_id, %activity_id, error = %join_err, "schedule write-back task aborted");
                failed.push(FailedWrite {
                    activity_id,
                    reason: join_err.to_string(),
                });
            }
        }
    }

    WriteReport { updated, failed }
}
