//! Open viewers, listed under the directory. A row brings its viewer
//! forward (and back into the browser); the x closes it.

use makepad_widgets::*;
use webframe_data::{WindowContent, WindowId};

use crate::host::ShellHost;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;
    use webframe_widgets::theme::*;

    ViewerRow = <View> {
        width: Fill, height: 40
        padding: {left: 14, right: 6}
        flow: Right
        align: {y: 0.5}
        cursor: Hand
        event_order: Down
        show_bg: true
        draw_bg: {
            instance selected: 0.0
            fn pixel(self) -> vec4 {
                return mix((PANEL_BG), (HOVER_BG), self.selected);
            }
        }
        <View> {
            width: Fill, height: Fit
            flow: Down
            spacing: 1
            viewer_title = <Label> {
                width: Fill
                draw_text: {
                    color: (TEXT_PRIMARY)
                    text_style: <FONT_BOLD>{ font_size: 10.0 }
                    wrap: Ellipsis
                }
            }
            viewer_src = <Label> {
                width: Fill
                draw_text: {
                    color: (ACCENT)
                    text_style: <FONT_REGULAR>{ font_size: 9.0 }
                    wrap: Ellipsis
                }
            }
        }
        close_btn = <Button> {
            width: 24, height: 24
            text: "x"
            draw_text: {
                color: (TEXT_MUTED)
                text_style: <FONT_BOLD>{ font_size: 10.0 }
            }
        }
    }

    pub ViewerPanel = {{ViewerPanel}} {
        width: Fill, height: 150
        flow: Down
        show_bg: true
        draw_bg: { color: (PANEL_BG) }

        <View> {
            width: Fill, height: Fit
            padding: {left: 14, right: 14, top: 8, bottom: 4}
            <Label> {
                text: "Open viewers"
                draw_text: {
                    color: (TEXT_MUTED)
                    text_style: <FONT_BOLD>{ font_size: 9.0 }
                }
            }
        }

        <View> {
            width: Fill, height: Fill
            flow: Overlay

            viewer_empty = <View> {
                width: Fill, height: Fill
                padding: {left: 14, top: 6}
                <Label> {
                    text: "Launched projects open in your browser"
                    draw_text: {
                        color: (TEXT_MUTED)
                        text_style: <FONT_REGULAR>{ font_size: 10.0 }
                    }
                }
            }

            viewer_list = <PortalList> {
                width: Fill, height: Fill
                flow: Down
                Viewer = <ViewerRow> {}
            }
        }
    }
}

#[derive(Clone, Debug, DefaultNone)]
pub enum ViewerPanelAction {
    Show(WindowId),
    Close(WindowId),
    None,
}

#[derive(Clone, Debug)]
struct ViewerEntry {
    id: WindowId,
    title: String,
    src: String,
}

#[derive(Live, LiveHook, Widget)]
pub struct ViewerPanel {
    #[deref]
    view: View,

    #[rust] entries: Vec<ViewerEntry>,
    #[rust] focused: Option<usize>,
}

impl Widget for ViewerPanel {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        let list = self.view.portal_list(ids!(viewer_list));
        for (item_id, item) in list.items_with_actions(&actions) {
            let Some(entry) = self.entries.get(item_id) else { continue };
            if item.button(ids!(close_btn)).clicked(&actions) {
                cx.action(ViewerPanelAction::Close(entry.id.clone()));
            } else if item.as_view().finger_down(&actions).is_some() {
                cx.action(ViewerPanelAction::Show(entry.id.clone()));
            }
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        let list = self.view.portal_list(ids!(viewer_list));
        let list_uid = list.widget_uid();

        while let Some(widget) = self.view.draw_walk(cx, scope, walk).step() {
            if widget.widget_uid() == list_uid {
                self.draw_entries(cx, scope, widget);
            }
        }

        DrawStep::done()
    }
}

impl ViewerPanel {
    /// Mirror the host's viewer windows and focus.
    pub fn sync_from_host(&mut self, cx: &mut Cx, host: &ShellHost) {
        self.entries = host
            .viewers()
            .filter_map(|spec| match &spec.content {
                WindowContent::Viewer(frame) => Some(ViewerEntry {
                    id: spec.id.clone(),
                    title: spec.title.clone(),
                    src: frame.src.clone(),
                }),
                WindowContent::Directory => None,
            })
            .collect();

        let focused_id = host.focused_viewer().map(|spec| spec.id.clone());
        self.focused = focused_id.and_then(|id| self.entries.iter().position(|e| e.id == id));

        self.view
            .widget(ids!(viewer_empty))
            .set_visible(cx, self.entries.is_empty());
        self.view.redraw(cx);
    }

    fn draw_entries(&mut self, cx: &mut Cx2d, scope: &mut Scope, widget: WidgetRef) {
        let binding = widget.as_portal_list();
        let Some(mut list) = binding.borrow_mut() else { return };

        list.set_item_range(cx, 0, self.entries.len());

        while let Some(item_id) = list.next_visible_item(cx) {
            let Some(entry) = self.entries.get(item_id) else { continue };
            let selected = if self.focused == Some(item_id) { 1.0 } else { 0.0 };

            let item = list.item(cx, item_id, live_id!(Viewer));
            item.label(ids!(viewer_title)).set_text(cx, &entry.title);
            item.label(ids!(viewer_src)).set_text(cx, &entry.src);
            item.apply_over(cx, live! {
                draw_bg: { selected: (selected) }
            });
            item.draw_all(cx, scope);
        }
    }
}
