//! Project records as served by `GET /v1/projects`.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// A remotely hosted project.
///
/// `domain` doubles as the display name and the viewer subdomain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Project {
    pub fn new(domain: impl Into<String>, description: Option<String>) -> Self {
        Self {
            domain: domain.into(),
            description,
        }
    }

    /// A project typed in by the user: identifier only.
    pub fn custom(domain: impl Into<String>) -> Self {
        Self::new(domain, None)
    }

    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Case-sensitive substring match against domain and description.
    ///
    /// A missing description behaves like an empty one.
    pub fn matches(&self, filter: &str) -> bool {
        filter.is_empty()
            || self.domain.contains(filter)
            || self.description_or_empty().contains(filter)
    }
}

#[derive(Deserialize)]
struct ProjectsResponse {
    items: Vec<Project>,
}

/// Decode a `/v1/projects` body into projects, preserving order.
pub fn parse_projects(body: &str) -> Result<Vec<Project>, FetchError> {
    serde_json::from_str::<ProjectsResponse>(body)
        .map(|resp| resp.items)
        .map_err(|e| FetchError::Parse(e.to_string()))
}
