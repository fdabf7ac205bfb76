//! Core domain types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One job posting extracted from a job-board page.
///
/// The serde renames give the wire form `{job_title, job_location, job_link,
/// company}`, which doubles as the extraction schema and the HTTP response
/// shape. The doc comments on the fields become schema descriptions that
/// steer the extraction model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct JobPosting {
    /// Title of the job as extracted from the job board page
    #[serde(rename = "job_title")]
    pub title: String,

    /// Location of the job as extracted from the job board page
    #[serde(rename = "job_location")]
    pub location: String,

    /// Link to the job posting as extracted from the job board page
    #[serde(rename = "job_link")]
    pub link: String,

    /// Company offering the job as extracted from the job board page
    pub company: String,
}

/// Wrapper for the extraction response. OpenAI strict mode wants a
/// top-level object, not a bare array.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct JobList {
    pub jobs: Vec<JobPosting>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_posting_wire_names() {
        let job = JobPosting {
            title: "Backend Engineer".to_string(),
            location: "Remote".to_string(),
            link: "/jobs/42".to_string(),
            company: "Acme".to_string(),
        };

        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["job_title"], "Backend Engineer");
        assert_eq!(value["job_location"], "Remote");
        assert_eq!(value["job_link"], "/jobs/42");
        assert_eq!(value["company"], "Acme");
    }

    #[test]
    fn test_job_list_parses_extraction_output() {
        let json = r#"{"jobs": [{"job_title": "SRE", "job_location": "Berlin", "job_link": "/jobs/7", "company": "Acme"}]}"#;
        let list: JobList = serde_json::from_str(json).unwrap();
        assert_eq!(list.jobs.len(), 1);
        assert_eq!(list.jobs[0].title, "SRE");
    }
}
