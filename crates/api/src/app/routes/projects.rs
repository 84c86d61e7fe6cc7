use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use planwright_core::ProjectId;

use crate::app::{AppServices, errors};

pub fn router() -> Router {
    Router::new().route("/:id/schedule", post(schedule_project))
}

/// Recompute and persist the full schedule of a project.
pub async fn schedule_project(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let project_id: ProjectId = match id.parse() {
        Ok(v) => v,
        Err(e) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", e.to_string());
        }
    };

    match services.scheduling.schedule_project(project_id).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => errors::schedule_error_to_response(e),
    }
}
