//! In-memory activity store for tests/dev.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use async_trait::async_trait;

use planwright_core::ProjectId;
use planwright_scheduling::{Activity, ActivityId, ScheduledDates};

use super::{ActivityStore, ProjectRecord, StoreError};

#[derive(Debug, Clone)]
struct StoredActivity {
    activity: Activity,
    planned: Option<ScheduledDates>,
}

/// In-memory implementation of [`ActivityStore`].
#[derive(Debug, Default)]
pub struct InMemoryActivityStore {
    projects: RwLock<HashMap<ProjectId, ProjectRecord>>,
    activities: RwLock<HashMap<ProjectId, BTreeMap<ActivityId, StoredActivity>>>,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a project row. Panics on a poisoned lock rather than dropping
    /// the seed, so test setup failures stay loud.
    pub fn insert_project(&self, record: ProjectRecord) {
        let mut projects = self.projects.write().expect("project lock poisoned");
        projects.insert(record.id, record);
    }

    /// Seed an activity into a project, with no planned dates yet. Panics on
    /// a poisoned lock like [`Self::insert_project`].
    pub fn insert_activity(&self, project_id: ProjectId, activity: Activity) {
        let mut activities = self.activities.write().expect("activity lock poisoned");
        activities.entry(project_id).or_default().insert(
            activity.id,
            StoredActivity {
                activity,
                planned: None,
            },
        );
    }

    /// Read back the planned dates written for an activity, if any.
    pub fn planned_dates(
        &self,
        project_id: ProjectId,
        activity_id: ActivityId,
    ) -> Option<ScheduledDates> {
        let activities = self.activities.read().ok()?;
        activities
            .get(&project_id)?
            .get(&activity_id)?
            .planned
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn project(&self, project_id: ProjectId) -> Result<Option<ProjectRecord>, StoreError> {
        let projects = self
            .projects
            .read()
            .map_err(|_| StoreError::Storage("project lock poisoned".into()))?;
        Ok(projects.get(&project_id).cloned())
    }

    async fn activities(&self, project_id: ProjectId) -> Result<Vec<Activity>, StoreError> {
        let activities = self
            .activities
            .read()
            .map_err(|_| StoreError::Storage("activity lock poisoned".into()))?;
        Ok(activities
            .get(&project_id)
            .map(|per_project| per_project.values().map(|s| s.activity.clone()).collect())
            .unwrap_or_default())
    }

    async fn update_planned_dates(
        &self,
        project_id: ProjectId,
        activity_id: ActivityId,
        dates: ScheduledDates,
    ) -> Result<(), StoreError> {
        let mut activities = self
            .activities
            .write()
            .map_err(|_| StoreError::Storage("activity lock poisoned".into()))?;
        let stored = activities
            .get_mut(&project_id)
            .and_then(|per_project| per_project.get_mut(&activity_id))
            .ok_or(StoreError::WriteFailed {
                activity_id,
                reason: "activity not found".into(),
            })?;
        stored.planned = Some(dates);
        Ok(())
    }
}
