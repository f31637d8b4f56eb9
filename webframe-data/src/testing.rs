//! In-memory host used by the unit tests.

use std::collections::BTreeMap;

use crate::error::HostError;
use crate::host::{AlertRequest, DialogHost, PromptRequest, WindowHost, WindowId, WindowSpec};

#[derive(Default)]
pub(crate) struct FakeHost {
    pub windows: BTreeMap<WindowId, WindowSpec>,
    pub created: Vec<WindowId>,
    pub focused: Vec<WindowId>,
    pub closed: Vec<WindowId>,
    pub alerts: Vec<(WindowId, AlertRequest)>,
    pub prompts: Vec<(WindowId, PromptRequest)>,
    pub fail_create: bool,
}

impl FakeHost {
    /// Simulate the user closing a window behind the store's back.
    pub fn destroy(&mut self, id: &WindowId) {
        self.windows.remove(id);
    }
}

impl WindowHost for FakeHost {
    fn create_window(&mut self, spec: WindowSpec) -> Result<WindowId, HostError> {
        if self.fail_create {
            return Err(HostError::CreateWindow {
                id: spec.id.to_string(),
                reason: "refused".to_string(),
            });
        }
        let id = spec.id.clone();
        self.created.push(id.clone());
        self.windows.insert(id.clone(), spec);
        Ok(id)
    }

    fn focus_window(&mut self, id: &WindowId) -> Result<(), HostError> {
        if !self.windows.contains_key(id) {
            return Err(HostError::UnknownWindow(id.to_string()));
        }
        self.focused.push(id.clone());
        Ok(())
    }

    fn close_window(&mut self, id: &WindowId) {
        self.windows.remove(id);
        self.closed.push(id.clone());
    }

    fn is_window_alive(&self, id: &WindowId) -> bool {
        self.windows.contains_key(id)
    }
}

impl DialogHost for FakeHost {
    fn alert(&mut self, parent: &WindowId, request: AlertRequest) {
        self.alerts.push((parent.clone(), request));
    }

    fn open_prompt(&mut self, parent: &WindowId, request: PromptRequest) {
        self.prompts.push((parent.clone(), request));
    }
}
