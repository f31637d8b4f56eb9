//! Runtime configuration injected by the host.
//!
//! Nothing here is read from disk or the environment; the shell builds a
//! `PortalConfig` (usually `PortalConfig::default()`) and hands it to `Store::new`.

use url::Url;

use crate::error::FetchError;

/// Domain every project is served from: `https://<identifier>.<PROVIDER_DOMAIN>`.
pub const PROVIDER_DOMAIN: &str = "glitch.me";

/// Default API root queried for `/v1/projects`.
pub const DEFAULT_API_BASE: &str = "https://api.glitch.com";

/// Width / height pair in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortalConfig {
    /// Shown in window titles ("<app_name> - <project>")
    pub app_name: String,
    /// Root of the project API, without the `/v1/projects` suffix
    pub api_base: String,
    /// Request timeout for the project list fetch
    pub request_timeout_secs: u64,
    /// Size of the directory (main) window
    pub main_window: WindowSize,
    /// Size of every viewer window
    pub viewer_window: WindowSize,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            app_name: "Glitch".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: 15,
            main_window: WindowSize::new(400, 500),
            viewer_window: WindowSize::new(800, 600),
        }
    }
}

impl PortalConfig {
    /// `<api_base>/v1/projects`
    pub fn projects_url(&self) -> Result<Url, FetchError> {
        let mut base = self.api_base.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        Url::parse(&base)
            .and_then(|url| url.join("v1/projects"))
            .map_err(|e| FetchError::Client(format!("invalid api base {:?}: {}", self.api_base, e)))
    }
}

/// `https://<identifier>.<PROVIDER_DOMAIN>`
pub fn viewer_url(identifier: &str) -> String {
    format!("https://{}.{}", identifier, PROVIDER_DOMAIN)
}
