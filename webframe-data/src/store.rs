use std::collections::VecDeque;
use std::sync::Arc;

use crate::config::PortalConfig;
use crate::custom_domain::{self, Resolution};
use crate::directory::{DirectoryState, DirectoryView};
use crate::error::{FetchError, HostError};
use crate::host::{
    AlertRequest, DialogHost, Host, PromptResponse, WindowContent, WindowHost, WindowId,
    WindowPosition, WindowSpec,
};
use crate::launcher::{LaunchDispatcher, LaunchOutcome};
use crate::project::Project;
use crate::project_source::{spawn_fetch, PendingFetch, ProjectSource};

/// Application lifecycle. There is no way back to `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Loading,
    Ready,
    Destroyed,
}

/// Actions that can be dispatched to modify the Store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    /// Search box text changed
    SetFilter(String),
    /// Launch button of a list row
    Launch(Project),
    /// "Custom domain" button: open the prompt
    OpenCustomDomain,
    /// The custom-domain prompt was closed
    CustomDomainAnswered(PromptResponse),
    /// The host destroyed a window (user closed it)
    WindowDestroyed(WindowId),
    /// Main window closed
    Close,
    /// No action
    None,
}

/// Work that runs after the current event turn.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DeferredTask {
    Launch { project: Project, refocus: bool },
    Focus(WindowId),
}

/// Central state container for the application.
///
/// Owned by the shell; every host interaction goes through the `Host` passed
/// into the call.
pub struct Store {
    config: PortalConfig,
    directory: DirectoryState,
    lifecycle: Lifecycle,
    dispatcher: LaunchDispatcher,
    pending_fetch: Option<PendingFetch>,
    deferred: VecDeque<DeferredTask>,
    main_window: WindowId,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(PortalConfig::default())
    }
}

impl Store {
    pub fn new(config: PortalConfig) -> Self {
        let dispatcher = LaunchDispatcher::new(&config);
        Self {
            config,
            directory: DirectoryState::new(),
            lifecycle: Lifecycle::Created,
            dispatcher,
            pending_fetch: None,
            deferred: VecDeque::new(),
            main_window: WindowId::main(),
        }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle == Lifecycle::Loading
    }

    pub fn directory(&self) -> &DirectoryState {
        &self.directory
    }

    pub fn dispatcher(&self) -> &LaunchDispatcher {
        &self.dispatcher
    }

    pub fn main_window(&self) -> &WindowId {
        &self.main_window
    }

    pub fn view(&self) -> DirectoryView {
        self.directory.render(self.is_loading())
    }

    /// The directory window: centered, titled with the app name.
    pub fn main_window_spec(&self) -> WindowSpec {
        WindowSpec {
            id: self.main_window.clone(),
            title: self.config.app_name.clone(),
            position: WindowPosition::Center,
            size: self.config.main_window,
            content: WindowContent::Directory,
        }
    }

    /// Created → Loading: open the main window and start the one fetch.
    pub fn activate<H: WindowHost + ?Sized>(
        &mut self,
        host: &mut H,
        source: Arc<dyn ProjectSource>,
    ) -> Result<(), HostError> {
        if self.lifecycle != Lifecycle::Created {
            log::warn!("activate ignored in state {:?}", self.lifecycle);
            return Ok(());
        }
        self.main_window = host.create_window(self.main_window_spec())?;
        self.pending_fetch = Some(spawn_fetch(source));
        self.lifecycle = Lifecycle::Loading;
        log::info!("Store activated, fetching project list");
        Ok(())
    }

    /// Pick up the fetch result if it has arrived. Returns true when the view changed.
    pub fn poll_fetch<H: DialogHost + ?Sized>(&mut self, host: &mut H) -> bool {
        let Some(result) = self.pending_fetch.as_ref().and_then(|p| p.poll()) else {
            return false;
        };
        self.pending_fetch = None;
        self.finish_fetch(host, result)
    }

    /// Loading → Ready. A no-op once the store is destroyed.
    pub fn finish_fetch<H: DialogHost + ?Sized>(
        &mut self,
        host: &mut H,
        result: Result<Vec<Project>, FetchError>,
    ) -> bool {
        if self.lifecycle == Lifecycle::Destroyed {
            log::debug!("fetch finished after close, dropping result");
            return false;
        }

        match result {
            Ok(projects) => {
                log::info!("Loaded {} projects", projects.len());
                self.directory.replace_projects(projects);
            }
            Err(e) => {
                log::error!("Failed to load projects: {}", e);
                host.alert(
                    &self.main_window,
                    AlertRequest {
                        title: self.config.app_name.clone(),
                        message: format!("Failed to load projects: {}", e),
                    },
                );
            }
        }
        self.lifecycle = Lifecycle::Ready;
        true
    }

    /// Handle a StoreAction and update state accordingly.
    /// Returns true when the directory view needs a redraw.
    pub fn handle_action(&mut self, host: &mut dyn Host, action: StoreAction) -> bool {
        if self.lifecycle == Lifecycle::Destroyed {
            log::debug!("ignoring {:?} after close", action);
            return false;
        }

        match action {
            StoreAction::SetFilter(filter) => {
                self.directory.set_filter(filter);
                true
            }
            StoreAction::Launch(project) => {
                self.deferred.push_back(DeferredTask::Launch { project, refocus: false });
                false
            }
            StoreAction::OpenCustomDomain => {
                host.open_prompt(&self.main_window, custom_domain::prompt_request());
                false
            }
            StoreAction::CustomDomainAnswered(response) => {
                match custom_domain::resolve(&response) {
                    Resolution::Launch(project) => {
                        self.deferred.push_back(DeferredTask::Launch { project, refocus: true });
                    }
                    Resolution::Invalid(input) => {
                        log::warn!("Rejected custom domain {:?}", input);
                        host.alert(
                            &self.main_window,
                            AlertRequest {
                                title: self.config.app_name.clone(),
                                message: format!("\"{}\" is not a valid project name", input),
                            },
                        );
                    }
                    Resolution::Ignored => {}
                }
                false
            }
            StoreAction::WindowDestroyed(id) => {
                if id == self.main_window {
                    self.close(host);
                    return true;
                }
                if let Some(identifier) = self.dispatcher.registry_mut().remove_window(&id) {
                    log::info!("Viewer for {} closed", identifier);
                }
                false
            }
            StoreAction::Close => {
                self.close(host);
                true
            }
            StoreAction::None => false,
        }
    }

    pub fn has_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Run the tasks queued before this call. Tasks queued while running
    /// (re-focus after a custom-domain launch) wait for the next turn.
    pub fn run_deferred(&mut self, host: &mut dyn Host) -> Vec<LaunchOutcome> {
        let mut outcomes = Vec::new();
        let tasks: Vec<DeferredTask> = self.deferred.drain(..).collect();

        for task in tasks {
            if self.lifecycle == Lifecycle::Destroyed {
                break;
            }
            match task {
                DeferredTask::Launch { project, refocus } => {
                    match self.dispatcher.launch(&mut *host, &project) {
                        Ok(outcome) => {
                            if refocus {
                                self.deferred.push_back(DeferredTask::Focus(outcome.window().clone()));
                            }
                            outcomes.push(outcome);
                        }
                        Err(e) => log::error!("Failed to launch {}: {}", project.domain, e),
                    }
                }
                DeferredTask::Focus(id) => {
                    if let Err(e) = host.focus_window(&id) {
                        log::warn!("Re-focus of {} failed: {}", id, e);
                    }
                }
            }
        }
        outcomes
    }

    /// Any → Destroyed: closes every viewer and drops the in-flight fetch.
    fn close(&mut self, host: &mut dyn Host) {
        for id in self.dispatcher.registry().window_ids() {
            host.close_window(id);
        }
        self.dispatcher.registry_mut().clear();
        self.deferred.clear();
        self.pending_fetch = None;
        self.lifecycle = Lifecycle::Destroyed;
        log::info!("Store destroyed");
    }
}
