use std::sync::Arc;

use anyhow::Context as _;
use makepad_widgets::*;

use webframe_data::{
    AlertRequest, FetchError, HttpProjectSource, Lifecycle, Project, ProjectSource,
    PromptRequest, PromptResponse, Store, StoreAction, WindowHost,
};
use webframe_projects::{ProjectsApp, ProjectsScreenAction};
use webframe_widgets::{AppRegistry, WebframeApp};

use crate::host::ShellHost;
use crate::viewer_panel::{ViewerPanel, ViewerPanelAction};

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;
    use webframe_widgets::theme::*;

    use webframe_projects::screen::design::*;
    use crate::viewer_panel::*;

    DialogButton = <Button> {
        width: Fit, height: 30
        padding: {left: 14, right: 14}
        draw_text: {
            text_style: <FONT_BOLD>{ font_size: 10.5 }
        }
    }

    App = {{App}} {
        ui: <Window> {
            // Title and size come from the store's main window spec
            window: { inner_size: vec2(400, 500) }
            pass: {
                clear_color: (APP_BG)
            }

            body = <View> {
                width: Fill, height: Fill
                flow: Overlay

                <View> {
                    width: Fill, height: Fill
                    flow: Down

                    header = <View> {
                        width: Fill, height: 44
                        padding: {left: 16, right: 16}
                        align: {y: 0.5}
                        show_bg: true
                        draw_bg: { color: (PANEL_BG) }

                        title_label = <Label> {
                            draw_text: {
                                color: (TEXT_PRIMARY)
                                text_style: <FONT_BOLD>{ font_size: 13.0 }
                            }
                        }
                    }

                    <View> {
                        width: Fill, height: 1
                        show_bg: true
                        draw_bg: { color: (BORDER) }
                    }

                    projects_screen = <ProjectsScreen> {}

                    <View> {
                        width: Fill, height: 1
                        show_bg: true
                        draw_bg: { color: (BORDER) }
                    }

                    viewer_panel = <ViewerPanel> {}
                }

                // Custom domain prompt, drawn over the directory
                prompt_overlay = <View> {
                    width: Fill, height: Fill
                    visible: false
                    align: {x: 0.5, y: 0.35}
                    show_bg: true
                    draw_bg: { color: #0006 }

                    <RoundedView> {
                        width: 340, height: Fit
                        flow: Down
                        spacing: 10
                        padding: 18
                        show_bg: true
                        draw_bg: {
                            color: (PANEL_BG)
                            border_radius: 8.0
                        }

                        prompt_title = <Label> {
                            draw_text: {
                                color: (TEXT_PRIMARY)
                                text_style: <FONT_BOLD>{ font_size: 12.5 }
                            }
                        }
                        prompt_message = <Label> {
                            width: Fill
                            draw_text: {
                                color: (TEXT_SECONDARY)
                                text_style: <FONT_REGULAR>{ font_size: 10.5 }
                                wrap: Word
                            }
                        }
                        prompt_input = <TextInput> {
                            width: Fill, height: 32
                            empty_text: "my-project"
                            draw_text: {
                                color: (TEXT_PRIMARY)
                                color_empty: (TEXT_MUTED)
                                text_style: { font_size: 11.5 }
                            }
                        }
                        <View> {
                            width: Fill, height: Fit
                            flow: Right
                            spacing: 8
                            align: {x: 1.0}
                            prompt_cancel_btn = <DialogButton> { text: "Cancel" }
                            prompt_ok_btn = <DialogButton> { text: "OK" }
                        }
                    }
                }
            }
        }
    }
}

/// Fetch source used when the HTTP client could not be built. The error is
/// reported through the normal fetch path so the user still gets one alert.
struct UnavailableSource(FetchError);

impl ProjectSource for UnavailableSource {
    fn fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
        Err(self.0.clone())
    }
}

#[derive(Live)]
pub struct App {
    #[live]
    ui: WidgetRef,
    #[rust]
    store: Store,
    #[rust]
    host: ShellHost,
    #[rust]
    registry: AppRegistry,
    /// Host revision the viewer panel last mirrored
    #[rust]
    synced_revision: u64,
    #[rust]
    prompt_open: bool,
}

impl LiveHook for App {
    fn after_new_from_doc(&mut self, cx: &mut Cx) {
        self.registry.register(ProjectsApp::info());
        for app in self.registry.apps() {
            ::log::info!("Registered app {} ({}): {}", app.name, app.id, app.description);
        }

        let spec = self.store.main_window_spec();
        let inner_size = vec2(spec.size.width as f32, spec.size.height as f32);
        self.ui.apply_over(cx, live! {
            window: { title: (spec.title.as_str()), inner_size: (inner_size) }
        });
        self.ui.label(ids!(body.header.title_label)).set_text(cx, &spec.title);
    }
}

impl LiveRegister for App {
    fn live_register(cx: &mut Cx) {
        makepad_widgets::live_design(cx);
        webframe_widgets::live_design(cx);
        <ProjectsApp as WebframeApp>::live_design(cx);
        crate::viewer_panel::live_design(cx);
    }
}

impl MatchEvent for App {
    fn handle_startup(&mut self, cx: &mut Cx) {
        if let Err(e) = self.start() {
            ::log::error!("Startup failed: {:#}", e);
            show_alert(&AlertRequest {
                title: self.store.config().app_name.clone(),
                message: format!("{:#}", e),
            });
            cx.quit();
            return;
        }

        cx.new_next_frame();
        self.ui.redraw(cx);
    }

    fn handle_actions(&mut self, cx: &mut Cx, actions: &Actions) {
        for action in actions {
            let store_action = screen_action(action.cast(), self.prompt_open);
            self.dispatch(cx, store_action);

            // The prompt is modal: the viewer list waits until it closes.
            if self.prompt_open {
                continue;
            }
            match action.cast() {
                ViewerPanelAction::Show(id) => {
                    if let Err(e) = self.host.show_viewer(&id) {
                        ::log::warn!("Cannot show {}: {}", id, e);
                    }
                }
                ViewerPanelAction::Close(id) => {
                    if self.host.destroy_window(&id) {
                        self.dispatch(cx, StoreAction::WindowDestroyed(id));
                    }
                }
                ViewerPanelAction::None => {}
            }
        }

        if self.prompt_open {
            let input = self.ui.text_input(ids!(prompt_input));
            if self.ui.button(ids!(prompt_ok_btn)).clicked(actions) {
                let value = input.text();
                self.answer_prompt(cx, PromptResponse::ok(value));
            } else if self.ui.button(ids!(prompt_cancel_btn)).clicked(actions) {
                self.answer_prompt(cx, PromptResponse::cancel());
            } else if let Some((value, _)) = input.returned(actions) {
                self.answer_prompt(cx, PromptResponse::ok(value));
            }
        }

        self.sync_host(cx);
    }
}

impl AppMain for App {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event) {
        match event {
            Event::NextFrame(_) => self.next_frame(cx),
            Event::WindowClosed(_) => self.dispatch(cx, StoreAction::Close),
            _ => {}
        }

        // ui.handle_event must run before match_event so that widget
        // actions exist when handle_actions runs.
        let scope = &mut Scope::with_data(&mut self.store);
        self.ui.handle_event(cx, event, scope);

        self.match_event(cx, event);
    }
}

impl App {
    /// Open the main window and kick off the project fetch.
    fn start(&mut self) -> anyhow::Result<()> {
        let source: Arc<dyn ProjectSource> = match HttpProjectSource::new(self.store.config()) {
            Ok(source) => {
                ::log::info!("Fetching projects from {}", source.url());
                Arc::new(source)
            }
            Err(e) => {
                ::log::error!("HTTP client unavailable: {}", e);
                Arc::new(UnavailableSource(e))
            }
        };
        self.store
            .activate(&mut self.host, source)
            .context("failed to open the main window")
    }

    fn dispatch(&mut self, cx: &mut Cx, action: StoreAction) {
        if matches!(action, StoreAction::None) {
            return;
        }
        ::log::debug!("dispatch {:?}", action);
        if self.store.handle_action(&mut self.host, action) {
            self.ui.redraw(cx);
        }
        if self.store.has_deferred() {
            cx.new_next_frame();
        }
        if self.store.lifecycle() == Lifecycle::Destroyed {
            ::log::info!("Main window closed, shutting down");
            cx.quit();
        }
    }

    fn next_frame(&mut self, cx: &mut Cx) {
        if self.store.poll_fetch(&mut self.host) {
            self.ui.redraw(cx);
        }
        if self.store.has_deferred() {
            let outcomes = self.store.run_deferred(&mut self.host);
            for outcome in &outcomes {
                ::log::debug!("launch outcome {:?}", outcome);
            }
        }
        self.sync_host(cx);

        if self.store.is_loading() || self.store.has_deferred() {
            cx.new_next_frame();
        }
    }

    /// Show whatever the store asked the host for since the last turn.
    fn sync_host(&mut self, cx: &mut Cx) {
        if let Some((_, request)) = self.host.take_prompt() {
            self.open_prompt(cx, &request);
        }

        for (parent, alert) in self.host.take_alerts() {
            ::log::debug!("alert on {}: {}", parent, alert.message);
            show_alert(&alert);
        }

        if self.host.revision() != self.synced_revision {
            self.synced_revision = self.host.revision();
            if let Some(mut panel) = self.ui.widget(ids!(viewer_panel)).borrow_mut::<ViewerPanel>() {
                panel.sync_from_host(cx, &self.host);
            }
        }
    }

    fn open_prompt(&mut self, cx: &mut Cx, request: &PromptRequest) {
        self.ui.label(ids!(prompt_title)).set_text(cx, &request.title);
        self.ui.label(ids!(prompt_message)).set_text(cx, &request.message);

        let input = self.ui.text_input(ids!(prompt_input));
        input.set_text(cx, "");
        input.set_key_focus(cx);
        ::log::debug!("prompt opened, placeholder {:?}", request.placeholder);

        self.ui.view(ids!(prompt_overlay)).set_visible(cx, true);
        self.prompt_open = true;
        self.ui.redraw(cx);
    }

    fn answer_prompt(&mut self, cx: &mut Cx, response: PromptResponse) {
        self.ui.view(ids!(prompt_overlay)).set_visible(cx, false);
        self.prompt_open = false;

        // Dismissing the prompt hands focus back to the directory; the store's
        // deferred re-focus brings the new viewer forward after that.
        let main = self.store.main_window().clone();
        if let Err(e) = self.host.focus_window(&main) {
            ::log::warn!("Cannot focus main window: {}", e);
        }
        self.dispatch(cx, StoreAction::CustomDomainAnswered(response));
        self.ui.redraw(cx);
    }
}

/// Map a directory screen action onto the store. While the custom-domain
/// prompt is open only filtering goes through.
fn screen_action(action: ProjectsScreenAction, prompt_open: bool) -> StoreAction {
    match action {
        ProjectsScreenAction::FilterChanged(filter) => StoreAction::SetFilter(filter),
        ProjectsScreenAction::Launch(project) if !prompt_open => StoreAction::Launch(project),
        ProjectsScreenAction::OpenCustomDomain if !prompt_open => StoreAction::OpenCustomDomain,
        ProjectsScreenAction::Launch(project) => {
            ::log::debug!("prompt open, ignoring launch of {}", project.domain);
            StoreAction::None
        }
        ProjectsScreenAction::OpenCustomDomain | ProjectsScreenAction::None => StoreAction::None,
    }
}

fn show_alert(alert: &AlertRequest) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(alert.title.as_str())
        .set_description(alert.message.as_str())
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

app_main!(App);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_while_prompt_open_is_ignored() {
        let project = Project::custom("foo");
        assert!(matches!(
            screen_action(ProjectsScreenAction::Launch(project.clone()), true),
            StoreAction::None
        ));
        assert!(matches!(
            screen_action(ProjectsScreenAction::OpenCustomDomain, true),
            StoreAction::None
        ));
        assert!(matches!(
            screen_action(ProjectsScreenAction::Launch(project.clone()), false),
            StoreAction::Launch(p) if p == project
        ));
    }

    #[test]
    fn filtering_passes_while_prompt_open() {
        assert!(matches!(
            screen_action(ProjectsScreenAction::FilterChanged("fo".into()), true),
            StoreAction::SetFilter(f) if f == "fo"
        ));
    }
}
