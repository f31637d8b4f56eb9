pub mod screen;

use makepad_widgets::Cx;
use webframe_widgets::{WebframeApp, AppInfo};

pub use screen::{ProjectsScreen, ProjectsScreenAction};

pub struct ProjectsApp;

impl WebframeApp for ProjectsApp {
    fn info() -> AppInfo {
        AppInfo {
            name: "Glitch",
            id: "webframe-projects",
            description: "Browse and launch hosted web projects",
        }
    }

    fn live_design(cx: &mut Cx) {
        crate::screen::design::live_design(cx);
    }
}
