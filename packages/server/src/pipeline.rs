//! End-to-end job extraction pipeline.
//!
//! One request, one pass: resolve the page's domain, have Crawlic describe
//! the page, gate on its declared type, extract the postings, then anchor
//! every job link at the page's domain. Failures map one-to-one onto
//! [`JobsError`] variants - no retries, no partial results.

use tracing::{debug, info};

use crate::common::JobPosting;
use crate::error::{JobsError, JobsResult};
use crate::kernel::ServerDeps;
use crate::links::{domain_of, normalize_job_link};

/// Page category Crawlic assigns to job boards. Anything else is rejected
/// before extraction.
pub const JOB_BOARD_PAGE_TYPE: &str = "Job Board";

/// Run the full pipeline for one page link.
pub async fn run_pipeline(deps: &ServerDeps, link: &str) -> JobsResult<Vec<JobPosting>> {
    if link.trim().is_empty() {
        return Err(JobsError::MissingLink);
    }

    let domain = domain_of(link);
    info!(url = %link, domain = %domain, "Fetching job board page");

    let page = deps
        .page_describer
        .describe_page(link)
        .await
        .map_err(JobsError::Upstream)?;

    if page.page_type != JOB_BOARD_PAGE_TYPE {
        debug!(page_type = %page.page_type, url = %link, "Page rejected by content gate");
        return Err(JobsError::NotAJobBoard);
    }

    let mut jobs = deps
        .job_extractor
        .extract_jobs(&page.content)
        .await
        .map_err(JobsError::Extraction)?;

    for job in &mut jobs {
        job.link = normalize_job_link(&job.link, &domain);
    }

    info!(jobs_count = jobs.len(), url = %link, "Job extraction complete");
    Ok(jobs)
}
