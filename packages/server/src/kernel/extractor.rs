//! Job extraction via structured LLM output.
//!
//! The page HTML goes to OpenAI with a strict schema derived from
//! [`JobList`]; the model must return every job on the page as
//! `{job_title, job_location, job_link, company}` records. Schema
//! conformance is enforced by the backend, so a returned result is already
//! well-typed.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::OpenAIClient;
use tracing::{debug, info};

use crate::common::{JobList, JobPosting};
use crate::kernel::traits::BaseJobExtractor;

/// System prompt for job extraction.
///
/// The no-truncation instruction is part of the contract with callers: a
/// long board must come back complete, not sampled.
pub const JOB_EXTRACTION_SYSTEM_PROMPT: &str = r#"You are an expert web content analyzer.

Given the HTML content of a job board web page, extract every job posted on that page into:

1. **job_title** - Title of the job as listed on the board
2. **job_location** - Location of the job as listed on the board
3. **job_link** - Link to the job description page
4. **company** - Company offering the job

Guidelines:
- For job_link, search the provided HTML for the href attribute of the job's anchor, which eventually takes to the job description page. Use it exactly as it appears, relative or absolute.
- For company, look in the provided HTML for a span or text that might be the company of the job.
- Important: make sure to include all the jobs provided in the HTML. Do not cut the list. I want all the jobs present in the HTML I provide to you."#;

/// [`BaseJobExtractor`] backed by OpenAI structured output.
pub struct OpenAIJobExtractor {
    client: OpenAIClient,
    model: String,
}

impl OpenAIJobExtractor {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl BaseJobExtractor for OpenAIJobExtractor {
    async fn extract_jobs(&self, html: &str) -> Result<Vec<JobPosting>> {
        if html.trim().is_empty() {
            return Ok(vec![]);
        }

        let user_prompt = format!(
            "Here is the HTML content of the job board web page:\n\n{}\n\nMake sure your output includes all the jobs in the HTML page.",
            html
        );

        debug!(
            html_bytes = html.len(),
            model = %self.model,
            "Extracting jobs from page content"
        );

        let response: JobList = self
            .client
            .extract::<JobList>(&self.model, JOB_EXTRACTION_SYSTEM_PROMPT, user_prompt)
            .await
            .map_err(|e| anyhow::anyhow!("Job extraction failed: {}", e))?;

        info!(jobs_count = response.jobs.len(), "Extraction complete");

        Ok(response.jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_prompt_not_empty() {
        assert!(!JOB_EXTRACTION_SYSTEM_PROMPT.is_empty());
        assert!(JOB_EXTRACTION_SYSTEM_PROMPT.len() > 200);
    }

    #[test]
    fn test_extraction_prompt_names_every_field() {
        for field in ["job_title", "job_location", "job_link", "company"] {
            assert!(
                JOB_EXTRACTION_SYSTEM_PROMPT.contains(field),
                "prompt should mention {}",
                field
            );
        }
    }

    #[test]
    fn test_extraction_prompt_forbids_truncation() {
        assert!(JOB_EXTRACTION_SYSTEM_PROMPT.contains("Do not cut the list"));
    }
}
