//! Launch dispatch: one viewer window per project identifier.

use std::collections::BTreeMap;

use crate::config::PortalConfig;
use crate::error::HostError;
use crate::host::{WindowContent, WindowHost, WindowId, WindowPosition, WindowSpec};
use crate::project::Project;
use crate::viewer::ViewerFrame;

/// Project identifier → open viewer window.
#[derive(Debug, Clone, Default)]
pub struct ViewerRegistry {
    windows: BTreeMap<String, WindowId>,
}

impl ViewerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, identifier: &str) -> Option<&WindowId> {
        self.windows.get(identifier)
    }

    pub fn insert(&mut self, identifier: impl Into<String>, id: WindowId) {
        self.windows.insert(identifier.into(), id);
    }

    /// Drop the entry owning `id`. Returns the project identifier it belonged to.
    pub fn remove_window(&mut self, id: &WindowId) -> Option<String> {
        let identifier = self
            .windows
            .iter()
            .find(|(_, window)| *window == id)
            .map(|(identifier, _)| identifier.clone())?;
        self.windows.remove(&identifier);
        Some(identifier)
    }

    pub fn window_ids(&self) -> impl Iterator<Item = &WindowId> {
        self.windows.values()
    }

    pub fn clear(&mut self) {
        self.windows.clear();
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

/// What `LaunchDispatcher::launch` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Opened(WindowId),
    Focused(WindowId),
}

impl LaunchOutcome {
    pub fn window(&self) -> &WindowId {
        match self {
            Self::Opened(id) | Self::Focused(id) => id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LaunchDispatcher {
    app_name: String,
    viewer_size: crate::config::WindowSize,
    registry: ViewerRegistry,
}

impl LaunchDispatcher {
    pub fn new(config: &PortalConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
            viewer_size: config.viewer_window,
            registry: ViewerRegistry::new(),
        }
    }

    pub fn registry(&self) -> &ViewerRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ViewerRegistry {
        &mut self.registry
    }

    /// Focus the project's viewer if it is still open, otherwise create one.
    pub fn launch<H: WindowHost + ?Sized>(
        &mut self,
        host: &mut H,
        project: &Project,
    ) -> Result<LaunchOutcome, HostError> {
        let key = WindowId::for_viewer(&project.domain);

        if let Some(existing) = self.registry.get(&project.domain).cloned() {
            if host.is_window_alive(&existing) {
                host.focus_window(&existing)?;
                log::info!("Focused viewer for {}", project.domain);
                return Ok(LaunchOutcome::Focused(existing));
            }
            log::debug!("Dropping stale viewer entry {}", existing);
            self.registry.remove_window(&existing);
        }

        let spec = WindowSpec {
            id: key,
            title: format!("{} - {}", self.app_name, project.domain),
            position: WindowPosition::Default,
            size: self.viewer_size,
            content: WindowContent::Viewer(ViewerFrame::for_project(&project.domain)),
        };
        let id = host.create_window(spec)?;
        self.registry.insert(project.domain.clone(), id.clone());
        log::info!("Opened viewer {} for {}", id, project.domain);
        Ok(LaunchOutcome::Opened(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeHost;

    fn dispatcher() -> LaunchDispatcher {
        LaunchDispatcher::new(&PortalConfig::default())
    }

    #[test]
    fn same_project_twice_opens_one_window() {
        let mut host = FakeHost::default();
        let mut dispatcher = dispatcher();
        let project = Project::custom("foo");

        let first = dispatcher.launch(&mut host, &project).unwrap();
        let second = dispatcher.launch(&mut host, &project).unwrap();

        assert_eq!(first, LaunchOutcome::Opened(WindowId::for_viewer("foo")));
        assert_eq!(second, LaunchOutcome::Focused(WindowId::for_viewer("foo")));
        assert_eq!(dispatcher.registry().len(), 1);
        assert_eq!(host.created.len(), 1);
        assert_eq!(host.focused, vec![WindowId::for_viewer("foo")]);
    }

    #[test]
    fn distinct_projects_get_distinct_windows() {
        let mut host = FakeHost::default();
        let mut dispatcher = dispatcher();

        dispatcher.launch(&mut host, &Project::custom("foo")).unwrap();
        dispatcher.launch(&mut host, &Project::custom("bar")).unwrap();

        assert_eq!(dispatcher.registry().len(), 2);
        assert_eq!(host.windows.len(), 2);
        assert_ne!(dispatcher.registry().get("foo"), dispatcher.registry().get("bar"));
    }

    #[test]
    fn viewer_spec_matches_project() {
        let mut host = FakeHost::default();
        let mut dispatcher = dispatcher();
        dispatcher
            .launch(&mut host, &Project::new("myapp", Some("demo".to_string())))
            .unwrap();

        let spec = &host.windows[&WindowId::for_viewer("myapp")];
        assert_eq!(spec.title, "Glitch - myapp");
        assert_eq!(spec.position, WindowPosition::Default);
        assert_eq!(spec.size, crate::config::WindowSize::new(800, 600));
        assert_eq!(
            spec.content,
            WindowContent::Viewer(ViewerFrame::for_project("myapp"))
        );
    }

    #[test]
    fn stale_entry_is_replaced() {
        let mut host = FakeHost::default();
        let mut dispatcher = dispatcher();
        let project = Project::custom("foo");

        dispatcher.launch(&mut host, &project).unwrap();
        host.destroy(&WindowId::for_viewer("foo"));

        let outcome = dispatcher.launch(&mut host, &project).unwrap();
        assert!(matches!(outcome, LaunchOutcome::Opened(_)));
        assert_eq!(dispatcher.registry().len(), 1);
        assert_eq!(host.created.len(), 2);
    }

    #[test]
    fn create_failure_leaves_registry_untouched() {
        let mut host = FakeHost { fail_create: true, ..FakeHost::default() };
        let mut dispatcher = dispatcher();

        let err = dispatcher.launch(&mut host, &Project::custom("foo")).unwrap_err();
        assert!(matches!(err, HostError::CreateWindow { .. }));
        assert!(dispatcher.registry().is_empty());
    }

    #[test]
    fn remove_window_reports_owner() {
        let mut registry = ViewerRegistry::new();
        registry.insert("foo", WindowId::for_viewer("foo"));
        assert_eq!(registry.remove_window(&WindowId::for_viewer("foo")).as_deref(), Some("foo"));
        assert_eq!(registry.remove_window(&WindowId::for_viewer("foo")), None);
    }
}
