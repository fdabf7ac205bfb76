//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod extractor;
pub mod test_dependencies;
pub mod traits;

pub use deps::{CrawlicAdapter, ServerDeps};
pub use extractor::{OpenAIJobExtractor, JOB_EXTRACTION_SYSTEM_PROMPT};
pub use test_dependencies::{MockJobExtractor, MockPageDescriber, TestDependencies};
pub use traits::*;
