//! Pure Crawlic REST API client.
//!
//! A minimal client for the Crawlic scraping service. Crawlic renders a page
//! and returns a description of it: a category label ("Job Board", "Blog",
//! ...) plus the rendered content.
//!
//! # Example
//!
//! ```rust,ignore
//! use crawlic_client::CrawlicClient;
//!
//! let client = CrawlicClient::new("https://crawlic.ialae.com", "your-api-key".into(), 10);
//!
//! let page = client.describe_page("https://example.com/careers").await?;
//! println!("{}: {} bytes", page.page_type, page.content.len());
//! ```

pub mod error;
pub mod types;

pub use error::{CrawlicError, Result};
pub use types::{DescribePageRequest, PageDescription};

use std::time::Duration;

use types::ApiResponse;

pub struct CrawlicClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CrawlicClient {
    /// Build a client against the given Crawlic deployment.
    ///
    /// `timeout_seconds` bounds each describe-page call; a page that takes
    /// longer to render than the budget fails as a network error rather than
    /// hanging the caller.
    pub fn new(base_url: &str, api_key: String, timeout_seconds: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Describe a page: render it and classify its content.
    ///
    /// Returns the page description on success. Crawlic-reported failure
    /// (`success: false` in the envelope) is an error — there is no partial
    /// description to return.
    pub async fn describe_page(&self, link: &str) -> Result<PageDescription> {
        let url = format!("{}/describe-page", self.base_url);
        let request = DescribePageRequest {
            link: link.to_string(),
        };

        tracing::debug!(link, "Requesting page description from Crawlic");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(CrawlicError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let api_resp: ApiResponse<PageDescription> = resp.json().await?;
        if !api_resp.success {
            let message = api_resp
                .error
                .unwrap_or_else(|| "no error detail provided".to_string());
            tracing::warn!(link, %message, "Crawlic reported failure");
            return Err(CrawlicError::Failed(message));
        }

        api_resp.data.ok_or_else(|| {
            CrawlicError::Failed("success response missing data payload".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = CrawlicClient::new("https://crawlic.ialae.com/", "key".into(), 10);
        assert_eq!(client.base_url, "https://crawlic.ialae.com");
    }

    #[test]
    fn test_envelope_parses_without_data() {
        let json = r#"{"success": false}"#;
        let resp: ApiResponse<PageDescription> = serde_json::from_str(json).unwrap();
        assert!(!resp.success);
        assert!(resp.data.is_none());
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_envelope_parses_page_description() {
        let json = r#"{"success": true, "data": {"type": "Job Board", "content": "<html></html>"}}"#;
        let resp: ApiResponse<PageDescription> = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        let page = resp.data.unwrap();
        assert_eq!(page.page_type, "Job Board");
        assert_eq!(page.content, "<html></html>");
    }
}
