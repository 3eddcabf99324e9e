use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde_json::json;

use super::domain::{CommissionEditRequest, JobId, JobSubmission};
use super::repository::{JobRepository, RepositoryError};
use super::service::{JobBoardError, JobBoardService};

/// Router builder exposing the posting and commission endpoints.
pub fn job_router<R>(service: Arc<JobBoardService<R>>) -> Router
where
    R: JobRepository + 'static,
{
    Router::new()
        .route("/api/v1/jobs", post(post_handler::<R>))
        .route(
            "/api/v1/jobs/:job_id/commission",
            get(commission_handler::<R>).put(edit_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn post_handler<R>(
    State(service): State<Arc<JobBoardService<R>>>,
    axum::Json(submission): axum::Json<JobSubmission>,
) -> Response
where
    R: JobRepository + 'static,
{
    match service.post(submission, Local::now().date_naive()) {
        Ok(record) => {
            let view = record.commission_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(JobBoardError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "job posting already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn commission_handler<R>(
    State(service): State<Arc<JobBoardService<R>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: JobRepository + 'static,
{
    let id = JobId(job_id);
    match service.commission(&id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(&id, error),
    }
}

pub(crate) async fn edit_handler<R>(
    State(service): State<Arc<JobBoardService<R>>>,
    Path(job_id): Path<String>,
    axum::Json(edit): axum::Json<CommissionEditRequest>,
) -> Response
where
    R: JobRepository + 'static,
{
    let id = JobId(job_id);
    match service.edit_commission(&id, &edit) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(&id, error),
    }
}

fn error_response(job_id: &JobId, error: JobBoardError) -> Response {
    match error {
        JobBoardError::Repository(RepositoryError::NotFound) => {
            let payload = json!({
                "job_id": job_id.0,
                "error": "job posting not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
