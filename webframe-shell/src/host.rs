//! Host capabilities backed by the shell.
//!
//! Makepad cannot spawn native windows on demand, so `ShellHost` keeps the
//! window table, the focus order and any dialog requests itself, and hands
//! each viewer's frame to a `FrameOpener` (the system browser in production)
//! to show the project.

use std::io;

use webframe_data::{
    AlertRequest, DialogHost, HostError, PromptRequest, WindowContent, WindowHost, WindowId,
    WindowSpec,
};

/// Shows a viewer frame's `src` as web content.
pub trait FrameOpener {
    fn open(&mut self, src: &str) -> io::Result<()>;
}

/// Opens frames in the user's default browser.
pub struct SystemBrowser;

impl FrameOpener for SystemBrowser {
    fn open(&mut self, src: &str) -> io::Result<()> {
        open::that(src)
    }
}

pub struct ShellHost {
    /// Open windows in creation order
    windows: Vec<WindowSpec>,
    /// Most recently focused last
    focus_stack: Vec<WindowId>,
    pending_prompt: Option<(WindowId, PromptRequest)>,
    pending_alerts: Vec<(WindowId, AlertRequest)>,
    /// Bumped on every window-table or focus change
    revision: u64,
    opener: Box<dyn FrameOpener>,
}

impl Default for ShellHost {
    fn default() -> Self {
        Self::with_opener(Box::new(SystemBrowser))
    }
}

impl ShellHost {
    pub fn with_opener(opener: Box<dyn FrameOpener>) -> Self {
        Self {
            windows: Vec::new(),
            focus_stack: Vec::new(),
            pending_prompt: None,
            pending_alerts: Vec::new(),
            revision: 0,
            opener,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn window(&self, id: &WindowId) -> Option<&WindowSpec> {
        self.windows.iter().find(|w| &w.id == id)
    }

    /// Viewer windows in creation order.
    pub fn viewers(&self) -> impl Iterator<Item = &WindowSpec> {
        self.windows
            .iter()
            .filter(|w| matches!(w.content, WindowContent::Viewer(_)))
    }

    pub fn focused(&self) -> Option<&WindowId> {
        self.focus_stack.last()
    }

    /// The viewer currently on top, if any viewer has ever been focused.
    pub fn focused_viewer(&self) -> Option<&WindowSpec> {
        self.focus_stack
            .iter()
            .rev()
            .filter_map(|id| self.window(id))
            .find(|w| matches!(w.content, WindowContent::Viewer(_)))
    }

    /// User picked a viewer in the shell: bring it forward and show its frame
    /// again, even when it is already on top.
    pub fn show_viewer(&mut self, id: &WindowId) -> Result<(), HostError> {
        let src = self
            .frame_src(id)
            .ok_or_else(|| HostError::UnknownWindow(id.to_string()))?;
        if let Err(e) = self.opener.open(&src) {
            ::log::warn!("Cannot open {}: {}", src, e);
        }
        self.raise(id);
        Ok(())
    }

    /// User closed a window from the shell chrome. The caller reports the
    /// destruction to the store.
    pub fn destroy_window(&mut self, id: &WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| &w.id != id);
        self.focus_stack.retain(|f| f != id);
        let removed = self.windows.len() != before;
        if removed {
            self.revision += 1;
        }
        removed
    }

    pub fn take_prompt(&mut self) -> Option<(WindowId, PromptRequest)> {
        self.pending_prompt.take()
    }

    pub fn take_alerts(&mut self) -> Vec<(WindowId, AlertRequest)> {
        std::mem::take(&mut self.pending_alerts)
    }

    fn frame_src(&self, id: &WindowId) -> Option<String> {
        match &self.window(id)?.content {
            WindowContent::Viewer(frame) => Some(frame.src.clone()),
            WindowContent::Directory => None,
        }
    }

    fn raise(&mut self, id: &WindowId) {
        self.focus_stack.retain(|f| f != id);
        self.focus_stack.push(id.clone());
        self.revision += 1;
    }
}

impl WindowHost for ShellHost {
    fn create_window(&mut self, spec: WindowSpec) -> Result<WindowId, HostError> {
        if self.window(&spec.id).is_some() {
            return Err(HostError::CreateWindow {
                id: spec.id.to_string(),
                reason: "a window with this id is already open".to_string(),
            });
        }
        if let WindowContent::Viewer(frame) = &spec.content {
            self.opener.open(&frame.src).map_err(|e| HostError::CreateWindow {
                id: spec.id.to_string(),
                reason: format!("cannot open {}: {}", frame.src, e),
            })?;
        }
        let id = spec.id.clone();
        ::log::debug!("create window {} ({:?}, {}x{})", id, spec.position, spec.size.width, spec.size.height);
        self.windows.push(spec);
        self.raise(&id);
        Ok(id)
    }

    fn focus_window(&mut self, id: &WindowId) -> Result<(), HostError> {
        if self.window(id).is_none() {
            return Err(HostError::UnknownWindow(id.to_string()));
        }
        if self.focused() == Some(id) {
            return Ok(());
        }
        if let Some(src) = self.frame_src(id) {
            if let Err(e) = self.opener.open(&src) {
                ::log::warn!("Cannot open {}: {}", src, e);
            }
        }
        self.raise(id);
        Ok(())
    }

    fn close_window(&mut self, id: &WindowId) {
        self.destroy_window(id);
    }

    fn is_window_alive(&self, id: &WindowId) -> bool {
        self.window(id).is_some()
    }
}

impl DialogHost for ShellHost {
    fn alert(&mut self, parent: &WindowId, request: AlertRequest) {
        self.pending_alerts.push((parent.clone(), request));
    }

    fn open_prompt(&mut self, parent: &WindowId, request: PromptRequest) {
        if self.pending_prompt.is_some() {
            ::log::debug!("prompt already pending, replacing it");
        }
        self.pending_prompt = Some((parent.clone(), request));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use webframe_data::{
        PortalConfig, Project, PromptResponse, Store, StoreAction, ViewerFrame, WindowPosition,
        WindowSize,
    };

    #[derive(Clone, Default)]
    struct RecordingOpener {
        opened: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl FrameOpener for RecordingOpener {
        fn open(&mut self, src: &str) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::NotFound, "no browser"));
            }
            self.opened.borrow_mut().push(src.to_string());
            Ok(())
        }
    }

    fn recording_host() -> (ShellHost, Rc<RefCell<Vec<String>>>) {
        let opener = RecordingOpener::default();
        let opened = opener.opened.clone();
        (ShellHost::with_opener(Box::new(opener)), opened)
    }

    fn viewer_spec(name: &str) -> WindowSpec {
        WindowSpec {
            id: WindowId::for_viewer(name),
            title: name.to_string(),
            position: WindowPosition::Default,
            size: WindowSize::new(800, 600),
            content: WindowContent::Viewer(ViewerFrame::for_project(name)),
        }
    }

    #[test]
    fn create_focus_and_destroy() {
        let (mut host, _) = recording_host();
        let a = host.create_window(viewer_spec("a")).unwrap();
        let b = host.create_window(viewer_spec("b")).unwrap();
        assert_eq!(host.focused(), Some(&b));

        host.focus_window(&a).unwrap();
        assert_eq!(host.focused_viewer().map(|w| &w.id), Some(&a));

        assert!(host.destroy_window(&a));
        assert!(!host.is_window_alive(&a));
        assert_eq!(host.focused_viewer().map(|w| &w.id), Some(&b));
        assert!(!host.destroy_window(&a));
    }

    #[test]
    fn duplicate_create_is_rejected() {
        let (mut host, opened) = recording_host();
        host.create_window(viewer_spec("a")).unwrap();
        assert!(matches!(
            host.create_window(viewer_spec("a")),
            Err(HostError::CreateWindow { .. })
        ));
        assert_eq!(host.viewers().count(), 1);
        assert_eq!(opened.borrow().len(), 1);
    }

    #[test]
    fn focus_unknown_window_fails() {
        let (mut host, _) = recording_host();
        assert!(host.focus_window(&WindowId::for_viewer("nope")).is_err());
        assert!(host.show_viewer(&WindowId::for_viewer("nope")).is_err());
    }

    #[test]
    fn launch_hands_frame_src_to_opener() {
        let (mut host, opened) = recording_host();
        let mut store = Store::new(PortalConfig::default());
        host.create_window(store.main_window_spec()).unwrap();
        assert!(opened.borrow().is_empty());

        store.handle_action(&mut host, StoreAction::Launch(Project::custom("myapp")));
        store.run_deferred(&mut host);
        assert_eq!(*opened.borrow(), ["https://myapp.glitch.me"]);
    }

    #[test]
    fn focus_reopens_only_background_viewers() {
        let (mut host, opened) = recording_host();
        let a = host.create_window(viewer_spec("a")).unwrap();
        let b = host.create_window(viewer_spec("b")).unwrap();

        host.focus_window(&b).unwrap();
        assert_eq!(opened.borrow().len(), 2);

        host.focus_window(&a).unwrap();
        assert_eq!(opened.borrow().last().map(String::as_str), Some("https://a.glitch.me"));
        assert_eq!(opened.borrow().len(), 3);

        host.show_viewer(&a).unwrap();
        assert_eq!(opened.borrow().len(), 4);
    }

    #[test]
    fn opener_failure_fails_creation() {
        let opener = RecordingOpener { fail: true, ..RecordingOpener::default() };
        let mut host = ShellHost::with_opener(Box::new(opener));
        assert!(matches!(
            host.create_window(viewer_spec("a")),
            Err(HostError::CreateWindow { .. })
        ));
        assert_eq!(host.viewers().count(), 0);
    }

    #[test]
    fn store_round_trip_through_shell_host() {
        let (mut host, opened) = recording_host();
        let mut store = Store::new(PortalConfig::default());
        host.create_window(store.main_window_spec()).unwrap();

        store.handle_action(&mut host, StoreAction::OpenCustomDomain);
        let (parent, _) = host.take_prompt().expect("prompt requested");
        assert_eq!(&parent, store.main_window());

        // Closing the prompt hands focus back to the main window first.
        host.focus_window(&WindowId::main()).unwrap();
        store.handle_action(&mut host, StoreAction::CustomDomainAnswered(PromptResponse::ok("myapp")));
        store.run_deferred(&mut host);
        store.run_deferred(&mut host);

        let viewer = WindowId::for_viewer("myapp");
        assert_eq!(host.focused(), Some(&viewer));
        // The re-focus of a viewer already on top does not open it twice.
        assert_eq!(*opened.borrow(), ["https://myapp.glitch.me"]);

        store.handle_action(&mut host, StoreAction::Launch(Project::custom("myapp")));
        store.run_deferred(&mut host);
        assert_eq!(host.viewers().count(), 1);
        assert_eq!(opened.borrow().len(), 1);

        host.destroy_window(&viewer);
        store.handle_action(&mut host, StoreAction::WindowDestroyed(viewer));
        assert!(store.dispatcher().registry().is_empty());
    }
}
