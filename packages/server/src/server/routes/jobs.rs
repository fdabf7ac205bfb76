//! Job extraction endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::common::JobPosting;
use crate::error::JobsError;
use crate::pipeline::run_pipeline;
use crate::server::app::AppState;

/// Response body for a successful extraction.
#[derive(Debug, Serialize)]
pub struct GetJobsResponse {
    pub success: bool,
    pub jobs: Vec<JobPosting>,
}

/// POST /get-jobs - extract every job posting from a job board page.
///
/// The body is read as loose JSON rather than a typed struct so that a
/// missing or malformed body still produces the documented 400 message
/// instead of a framework rejection.
pub async fn get_jobs_handler(
    State(state): State<AppState>,
    payload: Option<Json<serde_json::Value>>,
) -> Result<Json<GetJobsResponse>, JobsError> {
    let link = payload
        .as_ref()
        .and_then(|body| body.get("link"))
        .and_then(|value| value.as_str())
        .ok_or(JobsError::MissingLink)?;

    let jobs = run_pipeline(&state.deps, link).await?;

    Ok(Json(GetJobsResponse {
        success: true,
        jobs,
    }))
}
