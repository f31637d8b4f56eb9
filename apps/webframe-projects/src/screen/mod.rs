pub mod design;

use makepad_widgets::*;
use webframe_data::{DirectoryView, Project, Store};

/// What the screen asks the shell to do. The shell turns these into
/// `StoreAction`s.
#[derive(Clone, Debug, DefaultNone)]
pub enum ProjectsScreenAction {
    FilterChanged(String),
    Launch(Project),
    OpenCustomDomain,
    None,
}

/// Filterable project list. Reads the `Store` from the scope when drawing;
/// never mutates it.
#[derive(Live, LiveHook, Widget)]
pub struct ProjectsScreen {
    #[deref]
    view: View,

    /// Projects behind the rows drawn last frame, by row index
    #[rust] visible: Vec<Project>,
    #[rust] last_view: DirectoryView,
}

impl Widget for ProjectsScreen {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        self.handle_search(cx, &actions);
        self.handle_list_clicks(cx, &actions);

        if self.view.button(ids!(custom_domain_btn)).clicked(&actions) {
            cx.action(ProjectsScreenAction::OpenCustomDomain);
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.sync_from_store(cx, scope);

        let list = self.view.portal_list(ids!(project_list));
        let list_uid = list.widget_uid();

        while let Some(widget) = self.view.draw_walk(cx, scope, walk).step() {
            if widget.widget_uid() == list_uid {
                self.draw_project_list(cx, scope, widget);
            }
        }

        DrawStep::done()
    }
}

impl ProjectsScreen {
    fn sync_from_store(&mut self, cx: &mut Cx2d, scope: &mut Scope) {
        let Some(store) = scope.data.get::<Store>() else { return };

        self.visible = store.directory().visible().into_iter().cloned().collect();
        let view = store.view();
        if view == self.last_view {
            return;
        }

        self.view.label(ids!(summary_label)).set_text(cx, &view.summary);
        match &view.status {
            Some(status) => {
                self.view.label(ids!(status_label)).set_text(cx, status);
                self.view.widget(ids!(status_view)).set_visible(cx, true);
            }
            None => self.view.widget(ids!(status_view)).set_visible(cx, false),
        }
        self.last_view = view;
    }

    fn draw_project_list(&mut self, cx: &mut Cx2d, scope: &mut Scope, widget: WidgetRef) {
        let binding = widget.as_portal_list();
        let Some(mut list) = binding.borrow_mut() else { return };

        let rows = &self.last_view.rows;
        list.set_item_range(cx, 0, rows.len());

        while let Some(item_id) = list.next_visible_item(cx) {
            let Some(row) = rows.get(item_id) else { continue };

            let item = list.item(cx, item_id, live_id!(ProjectItem));
            item.label(ids!(project_name)).set_text(cx, &row.label);
            let description = row.description.as_deref().unwrap_or("");
            item.label(ids!(project_description)).set_text(cx, description);
            item.widget(ids!(project_description)).set_visible(cx, !description.is_empty());
            item.draw_all(cx, scope);
        }
    }

    fn handle_search(&mut self, cx: &mut Cx, actions: &Actions) {
        if let Some(text) = self.view.text_input(ids!(search_input)).changed(actions) {
            cx.action(ProjectsScreenAction::FilterChanged(text.to_string()));
        }
    }

    fn handle_list_clicks(&mut self, cx: &mut Cx, actions: &Actions) {
        let list = self.view.portal_list(ids!(project_list));
        for (item_id, item) in list.items_with_actions(actions) {
            if item.button(ids!(launch_btn)).clicked(actions) {
                if let Some(project) = self.visible.get(item_id) {
                    ::log::info!("Launch clicked for {}", project.domain);
                    cx.action(ProjectsScreenAction::Launch(project.clone()));
                }
            }
        }
    }
}
