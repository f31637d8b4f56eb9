//! Capabilities the host runtime hands to the application.
//!
//! The shell implements these traits and passes itself into `Store` calls; the
//! store never reaches for a global window manager or dialog service.

use std::fmt;

use crate::config::WindowSize;
use crate::error::HostError;
use crate::viewer::ViewerFrame;

/// Stable key of a host window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(String);

impl WindowId {
    pub const MAIN: &'static str = "webframe-main";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn main() -> Self {
        Self::new(Self::MAIN)
    }

    /// `webframe-viewer:<identifier>`
    pub fn for_viewer(identifier: &str) -> Self {
        Self(format!("webframe-viewer:{}", identifier))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPosition {
    Center,
    /// Host picks (cascade, last position, ...)
    Default,
}

/// What a window renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowContent {
    Directory,
    Viewer(ViewerFrame),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub id: WindowId,
    pub title: String,
    pub position: WindowPosition,
    pub size: WindowSize,
    pub content: WindowContent,
}

pub trait WindowHost {
    fn create_window(&mut self, spec: WindowSpec) -> Result<WindowId, HostError>;
    fn focus_window(&mut self, id: &WindowId) -> Result<(), HostError>;
    fn close_window(&mut self, id: &WindowId);
    fn is_window_alive(&self, id: &WindowId) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRequest {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub title: String,
    pub message: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButton {
    Ok,
    Cancel,
}

/// Answer to a `PromptRequest`, delivered back as a store action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptResponse {
    pub button: DialogButton,
    pub value: String,
}

impl PromptResponse {
    pub fn ok(value: impl Into<String>) -> Self {
        Self { button: DialogButton::Ok, value: value.into() }
    }

    pub fn cancel() -> Self {
        Self { button: DialogButton::Cancel, value: String::new() }
    }
}

pub trait DialogHost {
    fn alert(&mut self, parent: &WindowId, request: AlertRequest);
    /// Open a modal prompt; the answer arrives later as
    /// `StoreAction::CustomDomainAnswered`.
    fn open_prompt(&mut self, parent: &WindowId, request: PromptRequest);
}

/// The full capability bundle.
pub trait Host: WindowHost + DialogHost {}

impl<T: WindowHost + DialogHost> Host for T {}
