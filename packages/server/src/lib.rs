// Jobs Fetcher - API Core
//
// Backend service that turns a job-board page URL into structured job
// postings. Crawlic describes the page, OpenAI extracts the listings, and
// every job link is rewritten into an absolute URL on the board's domain.

pub mod common;
pub mod config;
pub mod error;
pub mod kernel;
pub mod links;
pub mod pipeline;
pub mod server;

pub use config::*;
