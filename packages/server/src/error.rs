//! Error taxonomy for the job extraction pipeline.
//!
//! Every failure surfaces to clients as a `{"success": false, "error": ...}`
//! body; the status code separates caller errors (400) from upstream and
//! internal errors (500). Nothing escapes the HTTP boundary unhandled, and
//! no failure returns partial results.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

/// Result type for pipeline operations.
pub type JobsResult<T> = std::result::Result<T, JobsError>;

/// Failures the pipeline can surface to clients.
#[derive(Debug, Error)]
pub enum JobsError {
    /// Request body carried no usable page link
    #[error("Missing 'link' in request payload")]
    MissingLink,

    /// Page exists but Crawlic classified it as something other than a job board
    #[error("The provided page is not a job board page")]
    NotAJobBoard,

    /// Scraping collaborator unreachable, non-2xx, or reported failure.
    /// The wire message is fixed; the cause is logged, not exposed.
    #[error("Error fetching web scraping service")]
    Upstream(anyhow::Error),

    /// Extraction backend unreachable or errored; the diagnostic goes to the client
    #[error("{0}")]
    Extraction(anyhow::Error),

    /// Anything unanticipated
    #[error("{0}")]
    Internal(anyhow::Error),
}

impl JobsError {
    /// HTTP status class for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            JobsError::MissingLink | JobsError::NotAJobBoard => StatusCode::BAD_REQUEST,
            JobsError::Upstream(_) | JobsError::Extraction(_) | JobsError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for JobsError {
    fn into_response(self) -> Response {
        match &self {
            JobsError::Upstream(cause) => {
                warn!(error = %cause, "Scraping collaborator call failed")
            }
            JobsError::Extraction(cause) => error!(error = %cause, "Job extraction failed"),
            JobsError::Internal(cause) => error!(error = %cause, "Unhandled pipeline failure"),
            JobsError::MissingLink | JobsError::NotAJobBoard => {}
        }

        let body = Json(serde_json::json!({
            "success": false,
            "error": self.to_string(),
        }));

        (self.status_code(), body).into_response()
    }
}
