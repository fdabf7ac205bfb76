//! Server dependencies for the pipeline (using traits for testability)
//!
//! Central dependency container handed to the extraction pipeline. Both
//! external services sit behind trait abstractions so tests can inject
//! canned responses and failures.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use crawlic_client::{CrawlicClient, PageDescription};
use openai_client::OpenAIClient;

use crate::config::Config;
use crate::kernel::extractor::OpenAIJobExtractor;
use crate::kernel::traits::{BaseJobExtractor, BasePageDescriber};

// =============================================================================
// CrawlicClient Adapter (implements BasePageDescriber trait)
// =============================================================================

/// Wrapper around CrawlicClient that implements the BasePageDescriber trait
pub struct CrawlicAdapter(pub Arc<CrawlicClient>);

impl CrawlicAdapter {
    pub fn new(client: Arc<CrawlicClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BasePageDescriber for CrawlicAdapter {
    async fn describe_page(&self, link: &str) -> Result<PageDescription> {
        self.0
            .describe_page(link)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to the pipeline (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    /// Scraping collaborator producing page descriptions
    pub page_describer: Arc<dyn BasePageDescriber>,
    /// Extraction backend turning page HTML into job postings
    pub job_extractor: Arc<dyn BaseJobExtractor>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        page_describer: Arc<dyn BasePageDescriber>,
        job_extractor: Arc<dyn BaseJobExtractor>,
    ) -> Self {
        Self {
            page_describer,
            job_extractor,
        }
    }

    /// Wire production dependencies from configuration.
    pub fn from_config(config: &Config) -> Self {
        let crawlic = Arc::new(CrawlicClient::new(
            &config.crawlic_base_url,
            config.crawlic_api_key.clone(),
            config.crawlic_timeout_seconds,
        ));

        let mut openai = OpenAIClient::new(config.openai_api_key.clone());
        if let Some(organization) = &config.openai_organization_id {
            openai = openai.with_organization(organization);
        }
        if let Some(project) = &config.openai_project_id {
            openai = openai.with_project(project);
        }

        Self::new(
            Arc::new(CrawlicAdapter::new(crawlic)),
            Arc::new(OpenAIJobExtractor::new(
                openai,
                config.extraction_model.clone(),
            )),
        )
    }
}
