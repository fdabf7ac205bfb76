// Test dependencies - mock implementations for testing
//
// Provides mock collaborators that can be injected into the pipeline.
// Each mock serves one canned response and records the calls it receives,
// so tests can assert both outcomes and which stages actually ran.

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use crawlic_client::PageDescription;

use crate::common::JobPosting;
use crate::kernel::deps::ServerDeps;
use crate::kernel::traits::{BaseJobExtractor, BasePageDescriber};

// =============================================================================
// Mock Page Describer
// =============================================================================

/// Canned-response page describer with call tracking.
#[derive(Clone, Default)]
pub struct MockPageDescriber {
    response: Arc<Mutex<Option<std::result::Result<PageDescription, String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockPageDescriber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to every describe call with a page of this type and content.
    pub fn with_page(self, page_type: &str, content: &str) -> Self {
        *self.response.lock().unwrap() = Some(Ok(PageDescription {
            page_type: page_type.to_string(),
            content: content.to_string(),
        }));
        self
    }

    /// Fail every describe call with the given message.
    pub fn with_failure(self, message: &str) -> Self {
        *self.response.lock().unwrap() = Some(Err(message.to_string()));
        self
    }

    /// URLs describe_page was called with.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BasePageDescriber for MockPageDescriber {
    async fn describe_page(&self, link: &str) -> Result<PageDescription> {
        self.calls.lock().unwrap().push(link.to_string());

        match self.response.lock().unwrap().clone() {
            Some(Ok(page)) => Ok(page),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Err(anyhow!("MockPageDescriber has no canned response")),
        }
    }
}

// =============================================================================
// Mock Job Extractor
// =============================================================================

/// Canned-response job extractor with call tracking.
///
/// Defaults to returning an empty job list, which mirrors a board with no
/// current openings.
#[derive(Clone, Default)]
pub struct MockJobExtractor {
    response: Arc<Mutex<Option<std::result::Result<Vec<JobPosting>, String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockJobExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to every extract call with these jobs.
    pub fn with_jobs(self, jobs: Vec<JobPosting>) -> Self {
        *self.response.lock().unwrap() = Some(Ok(jobs));
        self
    }

    /// Fail every extract call with the given message.
    pub fn with_failure(self, message: &str) -> Self {
        *self.response.lock().unwrap() = Some(Err(message.to_string()));
        self
    }

    /// HTML payloads extract_jobs was called with.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseJobExtractor for MockJobExtractor {
    async fn extract_jobs(&self, html: &str) -> Result<Vec<JobPosting>> {
        self.calls.lock().unwrap().push(html.to_string());

        match self.response.lock().unwrap().clone() {
            Some(Ok(jobs)) => Ok(jobs),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Ok(vec![]),
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Mocks wired into a ServerDeps, with handles kept for assertions.
pub struct TestDependencies {
    pub deps: ServerDeps,
    pub page_describer: MockPageDescriber,
    pub job_extractor: MockJobExtractor,
}

impl TestDependencies {
    pub fn new(page_describer: MockPageDescriber, job_extractor: MockJobExtractor) -> Self {
        let deps = ServerDeps::new(
            Arc::new(page_describer.clone()),
            Arc::new(job_extractor.clone()),
        );
        Self {
            deps,
            page_describer,
            job_extractor,
        }
    }
}
