//! Integration tests for the job extraction pipeline.
//!
//! Runs the pipeline against mock collaborators:
//! - happy path turns relative job links into absolute ones
//! - ATS-hosted links on foreign domains are preserved
//! - the content gate rejects non-job-board pages before extraction runs
//! - upstream failure short-circuits before extraction
//! - an empty extraction result is success, not an error

use server_core::common::JobPosting;
use server_core::error::JobsError;
use server_core::kernel::{MockJobExtractor, MockPageDescriber, TestDependencies};
use server_core::pipeline::run_pipeline;

// =============================================================================
// Test Helpers
// =============================================================================

const PAGE_URL: &str = "https://boards.example.com/careers";

const BOARD_HTML: &str = "<html><body><a href='/jobs/42'>Backend Engineer</a></body></html>";

fn job(title: &str, link: &str) -> JobPosting {
    JobPosting {
        title: title.to_string(),
        location: "Remote".to_string(),
        link: link.to_string(),
        company: "Acme".to_string(),
    }
}

// =============================================================================
// Happy Path
// =============================================================================

#[tokio::test]
async fn test_relative_links_anchored_at_page_domain() {
    let t = TestDependencies::new(
        MockPageDescriber::new().with_page("Job Board", BOARD_HTML),
        MockJobExtractor::new().with_jobs(vec![job("Backend Engineer", "/jobs/42")]),
    );

    let jobs = run_pipeline(&t.deps, PAGE_URL).await.expect("pipeline should succeed");

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Backend Engineer");
    assert_eq!(jobs[0].link, "https://boards.example.com/jobs/42");
}

#[tokio::test]
async fn test_foreign_ats_links_preserved() {
    let t = TestDependencies::new(
        MockPageDescriber::new().with_page("Job Board", BOARD_HTML),
        MockJobExtractor::new().with_jobs(vec![job("Platform Engineer", "https://jobs.lever.co/acme/xyz")]),
    );

    let jobs = run_pipeline(&t.deps, PAGE_URL).await.expect("pipeline should succeed");

    assert_eq!(jobs[0].link, "https://jobs.lever.co/acme/xyz");
}

#[tokio::test]
async fn test_mixed_links_normalized_independently() {
    let t = TestDependencies::new(
        MockPageDescriber::new().with_page("Job Board", BOARD_HTML),
        MockJobExtractor::new().with_jobs(vec![
            job("Backend Engineer", "/jobs/42"),
            job("Data Engineer", "openings/7"),
            job("SRE", "https://boards.greenhouse.io/acme/jobs/9"),
        ]),
    );

    let jobs = run_pipeline(&t.deps, PAGE_URL).await.expect("pipeline should succeed");

    assert_eq!(jobs[0].link, "https://boards.example.com/jobs/42");
    assert_eq!(jobs[1].link, "https://boards.example.com/openings/7");
    assert_eq!(jobs[2].link, "https://boards.greenhouse.io/acme/jobs/9");
}

#[tokio::test]
async fn test_extractor_receives_page_content_verbatim() {
    let t = TestDependencies::new(
        MockPageDescriber::new().with_page("Job Board", BOARD_HTML),
        MockJobExtractor::new(),
    );

    run_pipeline(&t.deps, PAGE_URL).await.expect("pipeline should succeed");

    assert_eq!(t.page_describer.calls(), vec![PAGE_URL.to_string()]);
    assert_eq!(t.job_extractor.calls(), vec![BOARD_HTML.to_string()]);
}

#[tokio::test]
async fn test_empty_extraction_is_success() {
    let t = TestDependencies::new(
        MockPageDescriber::new().with_page("Job Board", "<html><body>No openings</body></html>"),
        MockJobExtractor::new().with_jobs(vec![]),
    );

    let jobs = run_pipeline(&t.deps, PAGE_URL).await.expect("empty board is not an error");

    assert!(jobs.is_empty());
}

// =============================================================================
// Failure Branches
// =============================================================================

#[tokio::test]
async fn test_non_job_board_rejected_before_extraction() {
    let t = TestDependencies::new(
        MockPageDescriber::new().with_page("Blog", "<html><body>posts</body></html>"),
        MockJobExtractor::new(),
    );

    let err = run_pipeline(&t.deps, PAGE_URL).await.unwrap_err();

    assert!(matches!(err, JobsError::NotAJobBoard));
    assert_eq!(
        err.to_string(),
        "The provided page is not a job board page"
    );
    assert_eq!(t.job_extractor.call_count(), 0);
}

#[tokio::test]
async fn test_upstream_failure_short_circuits() {
    let t = TestDependencies::new(
        MockPageDescriber::new().with_failure("crawlic returned 502"),
        MockJobExtractor::new(),
    );

    let err = run_pipeline(&t.deps, PAGE_URL).await.unwrap_err();

    assert!(matches!(err, JobsError::Upstream(_)));
    assert_eq!(err.to_string(), "Error fetching web scraping service");
    assert_eq!(t.job_extractor.call_count(), 0);
}

#[tokio::test]
async fn test_extraction_failure_propagates_diagnostic() {
    let t = TestDependencies::new(
        MockPageDescriber::new().with_page("Job Board", BOARD_HTML),
        MockJobExtractor::new().with_failure("quota exceeded"),
    );

    let err = run_pipeline(&t.deps, PAGE_URL).await.unwrap_err();

    assert!(matches!(err, JobsError::Extraction(_)));
    assert!(err.to_string().contains("quota exceeded"));
}

#[tokio::test]
async fn test_blank_link_never_reaches_crawlic() {
    let t = TestDependencies::new(MockPageDescriber::new(), MockJobExtractor::new());

    let err = run_pipeline(&t.deps, "   ").await.unwrap_err();

    assert!(matches!(err, JobsError::MissingLink));
    assert_eq!(t.page_describer.call_count(), 0);
}
