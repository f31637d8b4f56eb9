pub mod theme;
pub mod app_trait;

pub use app_trait::{WebframeApp, AppInfo, AppRegistry};

use makepad_widgets::Cx;

/// Register all shared widgets with Makepad.
///
/// Call during `LiveRegister::live_register`, before any app registers its
/// screens: app designs import fonts and colors from `theme`.
pub fn live_design(cx: &mut Cx) {
    theme::live_design(cx);
}
