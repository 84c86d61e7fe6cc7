//! Persistence port for projects and activities.
//!
//! The scheduler treats the store as an opaque collaborator: it reads an
//! immutable snapshot of a project's activities and writes back one date
//! pair per activity. No schema specifics leak into the core.

pub mod memory;

pub use memory::InMemoryActivityStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use planwright_core::ProjectId;
use planwright_scheduling::{Activity, ActivityId, ScheduledDates};

/// The slice of a project record the scheduler reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub name: String,
    /// Anchor date for activities without predecessors.
    pub start_date: NaiveDate,
}

/// Store-level error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    #[error("write failed for activity {activity_id}: {reason}")]
    WriteFailed {
        activity_id: ActivityId,
        reason: String,
    },

    #[error("storage error: {0}")]
    Storage(String),
}

/// Read/write access to a project's activities.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// The project row, or `None` if the project does not exist.
    async fn project(&self, project_id: ProjectId) -> Result<Option<ProjectRecord>, StoreError>;

    /// All activities of a project (snapshot for one scheduling run).
    async fn activities(&self, project_id: ProjectId) -> Result<Vec<Activity>, StoreError>;

    /// Persist one activity's computed dates. Independently retryable;
    /// carries no ordering relationship to other activities' writes.
    async fn update_planned_dates(
        &self,
        project_id: ProjectId,
        activity_id: ActivityId,
        dates: ScheduledDates,
    ) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> ActivityStore for Arc<S>
where
    S: ActivityStore + ?Sized,
{
    async fn project(&self, project_id: ProjectId) -> Result<Option<ProjectRecord>, StoreError> {
        (**self).project(project_id).await
    }

    async fn activities(&self, project_id: ProjectId) -> Result<Vec<Activity>, StoreError> {
        (**self).activities(project_id).await
    }

    async fn update_planned_dates(
        &self,
        project_id: ProjectId,
        activity_id: ActivityId,
        dates: ScheduledDates,
    ) -> Result<(), StoreError> {
        (**self)
            .update_planned_dates(project_id, activity_id, dates)
            .await
    }
}
