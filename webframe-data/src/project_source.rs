//! Blocking HTTP source for the project list and its background runner.
//!
//!   GET <api_base>/v1/projects  → {"items": [{"domain": ..., "description": ...}]}
//!
//! The request runs on a plain `std::thread`; the UI thread picks the result
//! up from a `PendingFetch` on its next frame.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use crate::config::PortalConfig;
use crate::error::FetchError;
use crate::project::{parse_projects, Project};

/// Anything that can produce the full project collection.
pub trait ProjectSource: Send + Sync {
    fn fetch_projects(&self) -> Result<Vec<Project>, FetchError>;
}

/// `reqwest`-backed source for the remote API.
pub struct HttpProjectSource {
    url: url::Url,
    timeout: Duration,
}

impl HttpProjectSource {
    pub fn new(config: &PortalConfig) -> Result<Self, FetchError> {
        Ok(Self {
            url: config.projects_url()?,
            timeout: Duration::from_secs(config.request_timeout_secs),
        })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    fn client(&self) -> Result<reqwest::blocking::Client, FetchError> {
        reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("webframe/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))
    }
}

impl ProjectSource for HttpProjectSource {
    fn fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
        let client = self.client()?;
        let resp = client
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }

        let body = resp.text().map_err(|e| FetchError::Network(e.to_string()))?;
        parse_projects(&body)
    }
}

/// Result slot for a fetch running on a background thread.
pub struct PendingFetch {
    rx: Receiver<Result<Vec<Project>, FetchError>>,
}

impl PendingFetch {
    /// Non-blocking check; `None` while the request is still in flight.
    pub fn poll(&self) -> Option<Result<Vec<Project>, FetchError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(FetchError::Network(
                "fetch thread exited without a result".to_string(),
            ))),
        }
    }
}

/// Run `source.fetch_projects()` on a background thread.
pub fn spawn_fetch(source: Arc<dyn ProjectSource>) -> PendingFetch {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let result = source.fetch_projects();
        match &result {
            Ok(projects) => log::debug!("project fetch: received {} projects", projects.len()),
            Err(e) => log::debug!("project fetch failed: {}", e),
        }
        // Receiver is gone if the store was dropped; nothing to do then.
        let _ = tx.send(result);
    });
    PendingFetch { rx }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticSource(Result<Vec<Project>, FetchError>);

    impl ProjectSource for StaticSource {
        fn fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
            self.0.clone()
        }
    }

    #[test]
    fn spawn_fetch_delivers_result() {
        let source = Arc::new(StaticSource(Ok(vec![Project::custom("foo")])));
        let pending = spawn_fetch(source);
        let result = pending.rx.recv_timeout(Duration::from_secs(5)).expect("fetch result");
        assert_eq!(result.unwrap(), vec![Project::custom("foo")]);
    }

    #[test]
    fn spawn_fetch_delivers_error() {
        let source = Arc::new(StaticSource(Err(FetchError::Status(503))));
        let pending = spawn_fetch(source);
        let result = pending.rx.recv_timeout(Duration::from_secs(5)).expect("fetch result");
        assert_eq!(result, Err(FetchError::Status(503)));
    }

    #[test]
    fn unreachable_host_is_a_network_error() {
        let config = PortalConfig {
            api_base: "http://127.0.0.1:1".to_string(),
            request_timeout_secs: 5,
            ..PortalConfig::default()
        };
        let source = HttpProjectSource::new(&config).unwrap();
        assert_eq!(source.url(), "http://127.0.0.1:1/v1/projects");
        assert!(matches!(source.fetch_projects(), Err(FetchError::Network(_))));
    }
}
