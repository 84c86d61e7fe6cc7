use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use planwright_infra::ScheduleProjectError;
use planwright_scheduling::SchedulingError;

pub fn schedule_error_to_response(err: ScheduleProjectError) -> axum::response::Response {
    match err {
        ScheduleProjectError::ProjectNotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        ScheduleProjectError::Validation(SchedulingError::CycleDetected { ref path }) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(json!({
                "error": "cycle_detected",
                "message": err.to_string(),
                "path": path.iter().map(ToString::to_string).collect::<Vec<_>>(),
            })),
        )
            .into_response(),
        ScheduleProjectError::Validation(e) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string())
        }
        ScheduleProjectError::Store(e) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
