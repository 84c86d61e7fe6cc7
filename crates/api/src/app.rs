//! Application wiring: services and the router tree.

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use planwright_infra::{ActivityStore, SchedulingService};

pub mod errors;
pub mod routes;

/// Shared application services handed to handlers via `Extension`.
pub struct AppServices {
    pub scheduling: SchedulingService,
}

impl AppServices {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self {
            scheduling: SchedulingService::new(store),
        }
    }
}

/// Build the router against a store implementation.
pub fn build_app(store: Arc<dyn ActivityStore>) -> Router {
    let services = Arc::new(AppServices::new(store));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/projects", routes::projects::router())
        .layer(Extension(services))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use tower::ServiceExt;

    use planwright_core::{AggregateId, ProjectId};
    use planwright_infra::{InMemoryActivityStore, ProjectRecord, StoreError};
    use planwright_scheduling::{Activity, ActivityId, ScheduledDates};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded_app() -> (Router, ProjectId, ActivityId, ActivityId) {
        let store = Arc::new(InMemoryActivityStore::new());
        let project_id = ProjectId::new();
        store.insert_project(ProjectRecord {
            id: project_id,
            name: "Warehouse build".into(),
            start_date: date(2024, 1, 1),
        });

        let a = Activity::new(ActivityId::new(AggregateId::new()), "A", "Groundwork", 5);
        let a_id = a.id;
        let mut b = Activity::new(ActivityId::new(AggregateId::new()), "B", "Foundations", 3);
        b.predecessors = vec![a_id];
        let b_id = b.id;
        store.insert_activity(project_id, a);
        store.insert_activity(project_id, b);

        (build_app(store), project_id, a_id, b_id)
    }

    async fn post(app: Router, uri: String) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (app, _, _, _) = seeded_app();
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn schedule_project_returns_summary() {
        let (app, project_id, a_id, b_id) = seeded_app();

        let (status, body) = post(app, format!("/projects/{project_id}/schedule")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scheduled"], 2);
        assert_eq!(body["project_start"], "2024-01-01");
        let updated: Vec<String> = body["updated"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        assert!(updated.contains(&a_id.to_string()));
        assert!(updated.contains(&b_id.to_string()));
        assert!(body["failed"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_project_maps_to_not_found() {
        let (app, _, _, _) = seeded_app();
        let (status, body) = post(app, format!("/projects/{}/schedule", ProjectId::new())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn malformed_id_maps_to_bad_request() {
        let (app, _, _, _) = seeded_app();
        let (status, body) = post(app, "/projects/not-a-uuid/schedule".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_id");
    }

    #[tokio::test]
    async fn store_read_failure_maps_to_internal_error() {
        /// Store whose backend is down: every call fails.
        struct DownStore;

        #[async_trait::async_trait]
        impl ActivityStore for DownStore {
            async fn project(
                &self,
                _project_id: ProjectId,
            ) -> Result<Option<ProjectRecord>, StoreError> {
                Err(StoreError::Storage("connection reset".into()))
            }

            async fn activities(
                &self,
                _project_id: ProjectId,
            ) -> Result<Vec<Activity>, StoreError> {
                Err(StoreError::Storage("connection reset".into()))
            }

            async fn update_planned_dates(
                &self,
                _project_id: ProjectId,
                activity_id: ActivityId,
                _dates: ScheduledDates,
            ) -> Result<(), StoreError> {
                Err(StoreError::WriteFailed {
                    activity_id,
                    reason: "connection reset".into(),
                })
            }
        }

        let app = build_app(Arc::new(DownStore));
        let (status, body) = post(app, format!("/projects/{}/schedule", ProjectId::new())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "store_error");
    }

    #[tokio::test]
    async fn cyclic_project_maps_to_unprocessable() {
        let store = Arc::new(InMemoryActivityStore::new());
        let project_id = ProjectId::new();
        store.insert_project(ProjectRecord {
            id: project_id,
            name: "Cyclic".into(),
            start_date: date(2024, 1, 1),
        });
        let (a_id, b_id) = (
            ActivityId::new(AggregateId::new()),
            ActivityId::new(AggregateId::new()),
        );
        let mut a = Activity::new(a_id, "A", "A", 1);
        a.predecessors = vec![b_id];
        let mut b = Activity::new(b_id, "B", "B", 1);
        b.predecessors = vec![a_id];
        store.insert_activity(project_id, a);
        store.insert_activity(project_id, b);

        let app = build_app(store);
        let (status, body) = post(app, format!("/projects/{project_id}/schedule")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "cycle_detected");
    }
}
