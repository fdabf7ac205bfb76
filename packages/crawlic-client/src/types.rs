use serde::{Deserialize, Serialize};

/// Request body for the describe-page endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct DescribePageRequest {
    pub link: String,
}

/// Crawlic's description of a scraped page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageDescription {
    /// Page-category label, e.g. "Job Board", "Blog", "Product Page".
    #[serde(rename = "type")]
    pub page_type: String,
    /// Rendered HTML (or HTML-derived text) of the page.
    pub content: String,
}

/// Wrapper for Crawlic API responses.
///
/// `data` is absent when `success` is false.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}
