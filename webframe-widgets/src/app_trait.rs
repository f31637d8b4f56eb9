//! # WebframeApp Trait - Plugin App Interface
//!
//! Apps are separate crates that implement `WebframeApp`. The shell imports
//! them, registers their widgets via `live_design(cx)` and records their
//! metadata in an `AppRegistry` it owns. There is no process-wide registry:
//! whoever builds the shell decides which apps exist.
//!
//! ## Usage in Shell
//!
//! ```rust,ignore
//! use webframe_widgets::{WebframeApp, AppRegistry};
//! use webframe_projects::ProjectsApp;
//!
//! fn live_register(cx: &mut Cx) {
//!     makepad_widgets::live_design(cx);
//!     webframe_widgets::live_design(cx);
//!     <ProjectsApp as WebframeApp>::live_design(cx);
//! }
//!
//! let mut registry = AppRegistry::new();
//! registry.register(ProjectsApp::info());
//! ```

use makepad_widgets::Cx;

/// Metadata about a registered app
#[derive(Clone, Debug)]
pub struct AppInfo {
    /// Display name shown in window titles
    pub name: &'static str,
    /// Unique identifier for the app
    pub id: &'static str,
    pub description: &'static str,
}

/// Trait for apps that integrate with the shell
pub trait WebframeApp {
    /// Returns metadata about this app
    fn info() -> AppInfo where Self: Sized;

    /// Register this app's widgets with Makepad
    fn live_design(cx: &mut Cx);
}

/// Registry of installed apps, owned by the shell.
#[derive(Default)]
pub struct AppRegistry {
    apps: Vec<AppInfo>,
}

impl AppRegistry {
    pub const fn new() -> Self {
        Self { apps: Vec::new() }
    }

    /// Register an app. A second registration with the same id replaces the first.
    pub fn register(&mut self, info: AppInfo) {
        if let Some(existing) = self.apps.iter_mut().find(|app| app.id == info.id) {
            ::log::warn!("App {} registered twice, replacing", info.id);
            *existing = info;
        } else {
            self.apps.push(info);
        }
    }

    pub fn apps(&self) -> &[AppInfo] {
        &self.apps
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(id: &'static str, name: &'static str) -> AppInfo {
        AppInfo { name, id, description: "" }
    }

    #[test]
    fn register_keeps_order() {
        let mut registry = AppRegistry::new();
        assert!(registry.is_empty());
        registry.register(info("projects", "Projects"));
        registry.register(info("other", "Other"));

        assert_eq!(registry.len(), 2);
        let ids: Vec<&str> = registry.apps().iter().map(|a| a.id).collect();
        assert_eq!(ids, ["projects", "other"]);
    }

    #[test]
    fn duplicate_id_replaces() {
        let mut registry = AppRegistry::new();
        registry.register(info("projects", "Old"));
        registry.register(info("projects", "New"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.apps()[0].name, "New");
    }
}
