use thiserror::Error;

/// Why the project list could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("failed to prepare request: {0}")]
    Client(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("invalid project list: {0}")]
    Parse(String),
}

/// Failure reported by the host runtime while managing windows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("could not create window {id}: {reason}")]
    CreateWindow { id: String, reason: String },
    #[error("window {0} does not exist")]
    UnknownWindow(String),
}
