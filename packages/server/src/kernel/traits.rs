// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (the extraction pipeline) lives in functions that use them.
//
// Naming convention: Base* for trait names (e.g., BasePageDescriber)

use anyhow::Result;
use async_trait::async_trait;
use crawlic_client::PageDescription;

use crate::common::JobPosting;

// =============================================================================
// Page Describer Trait (Infrastructure - scraping collaborator)
// =============================================================================

/// Scraping collaborator: renders a page and reports its category + content.
#[async_trait]
pub trait BasePageDescriber: Send + Sync {
    /// Describe the page behind `link`. Transport errors, non-2xx responses,
    /// and collaborator-reported failures all surface here as errors.
    async fn describe_page(&self, link: &str) -> Result<PageDescription>;
}

// =============================================================================
// Job Extractor Trait (Infrastructure - extraction backend)
// =============================================================================

/// Extraction backend: turns raw page HTML into structured job postings.
#[async_trait]
pub trait BaseJobExtractor: Send + Sync {
    /// Extract every job listing present in `html`. An empty list is a
    /// valid result - the page may have no current openings.
    async fn extract_jobs(&self, html: &str) -> Result<Vec<JobPosting>>;
}
