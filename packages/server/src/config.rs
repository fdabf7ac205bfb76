use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub crawlic_api_key: String,
    pub crawlic_base_url: String,
    pub crawlic_timeout_seconds: u64,
    pub openai_api_key: String,
    pub openai_organization_id: Option<String>,
    pub openai_project_id: Option<String>,
    pub extraction_model: String,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "5001".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            crawlic_api_key: env::var("CRAWLIC_API_KEY")
                .context("CRAWLIC_API_KEY must be set")?,
            crawlic_base_url: env::var("CRAWLIC_BASE_URL")
                .unwrap_or_else(|_| "https://crawlic.ialae.com".to_string()),
            crawlic_timeout_seconds: env::var("CRAWLIC_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("CRAWLIC_TIMEOUT_SECONDS must be a valid number")?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY must be set")?,
            openai_organization_id: env::var("OPENAI_ORGANIZATION_ID").ok(),
            openai_project_id: env::var("OPENAI_PROJECT_ID").ok(),
            extraction_model: env::var("EXTRACTION_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| {
                    "http://localhost:5173,http://localhost:8080".to_string()
                })
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        })
    }
}
