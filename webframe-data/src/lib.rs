pub mod config;
pub mod custom_domain;
pub mod directory;
pub mod error;
pub mod host;
pub mod launcher;
pub mod project;
pub mod project_source;
pub mod store;
pub mod viewer;

#[cfg(test)]
mod testing;

pub use config::{viewer_url, PortalConfig, WindowSize, PROVIDER_DOMAIN};
pub use directory::{DirectoryState, DirectoryView, ProjectRow};
pub use error::{FetchError, HostError};
pub use host::{
    AlertRequest, DialogButton, DialogHost, Host, PromptRequest, PromptResponse, WindowContent,
    WindowHost, WindowId, WindowPosition, WindowSpec,
};
pub use launcher::{LaunchDispatcher, LaunchOutcome, ViewerRegistry};
pub use project::{parse_projects, Project};
pub use project_source::{spawn_fetch, HttpProjectSource, PendingFetch, ProjectSource};
pub use store::{Lifecycle, Store, StoreAction};
pub use viewer::ViewerFrame;
