//! The single frame a viewer window hosts.

use crate::config::viewer_url;

/// Declarative embedded frame: full size, no border, white fallback.
/// Hosts load `src` into whatever surface shows web content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerFrame {
    pub src: String,
    pub width_percent: u8,
    pub height_percent: u8,
    pub border: u8,
    pub background: &'static str,
}

impl ViewerFrame {
    pub fn for_project(identifier: &str) -> Self {
        Self {
            src: viewer_url(identifier),
            width_percent: 100,
            height_percent: 100,
            border: 0,
            background: "#ffffff",
        }
    }
}
