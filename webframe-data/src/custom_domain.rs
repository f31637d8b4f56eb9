//! "Open custom domain" prompt.

use url::Url;

use crate::config::PROVIDER_DOMAIN;
use crate::host::{DialogButton, PromptRequest, PromptResponse};
use crate::project::Project;

pub fn prompt_request() -> PromptRequest {
    PromptRequest {
        title: "Custom domain".to_string(),
        message: format!("Enter a project name (the part before .{})", PROVIDER_DOMAIN),
        placeholder: "my-project".to_string(),
    }
}

/// What a prompt answer asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Cancelled or empty input
    Ignored,
    Launch(Project),
    /// Input that cannot name a project host (`foo/bar`, `a b`)
    Invalid(String),
}

pub fn resolve(response: &PromptResponse) -> Resolution {
    if response.button != DialogButton::Ok {
        return Resolution::Ignored;
    }
    match normalize(&response.value) {
        None => Resolution::Ignored,
        Some(identifier) if is_valid_identifier(&identifier) => {
            Resolution::Launch(Project::custom(identifier))
        }
        Some(_) => Resolution::Invalid(response.value.trim().to_string()),
    }
}

/// A single DNS label: ASCII letters, digits and inner hyphens.
pub fn is_valid_identifier(identifier: &str) -> bool {
    !identifier.is_empty()
        && !identifier.starts_with('-')
        && !identifier.ends_with('-')
        && identifier.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Trim the input and reduce a pasted viewer URL or host to its identifier.
pub fn normalize(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let host = if input.contains("://") {
        Url::parse(input)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| input.to_string())
    } else {
        input.trim_end_matches('/').to_string()
    };

    let suffix = format!(".{}", PROVIDER_DOMAIN);
    let identifier = host.strip_suffix(&suffix).unwrap_or(&host);
    if identifier.is_empty() {
        None
    } else {
        Some(identifier.to_string())
    }
}
