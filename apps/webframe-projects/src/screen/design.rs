use makepad_widgets::*;
use super::ProjectsScreen;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;
    use webframe_widgets::theme::*;

    // ── Launch button ──

    ProjectLaunchButton = <Button> {
        width: Fit, height: 28
        padding: {left: 12, right: 12}
        text: "Launch"
        animator: {
            hover = {
                default: off,
                off = { from: {all: Forward {duration: 0.1}} apply: { draw_bg: {hover: 0.0} } }
                on  = { from: {all: Forward {duration: 0.1}} apply: { draw_bg: {hover: 1.0} } }
            }
            pressed = {
                default: off,
                off = { from: {all: Forward {duration: 0.07}} apply: { draw_bg: {pressed: 0.0} } }
                on  = { from: {all: Forward {duration: 0.07}} apply: { draw_bg: {pressed: 1.0} } }
            }
        }
        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, 4.0);
                let color = mix((ACCENT), (ACCENT_HOVER), self.hover);
                sdf.fill(mix(color, color * 0.9, self.pressed));
                return sdf.result;
            }
        }
        draw_text: {
            color: (WHITE)
            text_style: <FONT_BOLD>{ font_size: 10.5 }
        }
    }

    // ── Project list item ──

    ProjectListItem = <View> {
        width: Fill, height: Fit
        padding: {left: 14, right: 10, top: 9, bottom: 9}
        flow: Right
        align: {y: 0.5}
        show_bg: true
        draw_bg: {
            color: (PANEL_BG)
        }
        <View> {
            width: Fill, height: Fit
            flow: Down
            spacing: 2
            project_name = <Label> {
                width: Fill
                draw_text: {
                    color: (TEXT_PRIMARY)
                    text_style: <FONT_BOLD>{ font_size: 11.5 }
                    wrap: Ellipsis
                }
            }
            project_description = <Label> {
                width: Fill
                draw_text: {
                    color: (TEXT_SECONDARY)
                    text_style: <FONT_REGULAR>{ font_size: 10.0 }
                    wrap: Word
                }
            }
        }
        launch_btn = <ProjectLaunchButton> {}
    }

    // Main ProjectsScreen widget
    pub ProjectsScreen = {{ProjectsScreen}} {
        width: Fill, height: Fill
        flow: Down
        show_bg: true
        draw_bg: {
            color: (APP_BG)
        }

        // Toolbar: search + custom domain
        <View> {
            width: Fill, height: Fit
            flow: Right
            spacing: 8
            align: {y: 0.5}
            padding: {left: 10, right: 10, top: 10, bottom: 6}

            search_input = <TextInput> {
                width: Fill, height: 32
                empty_text: "Filter projects..."
                draw_bg: {
                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, 5.0);
                        sdf.fill((HOVER_BG));
                        return sdf.result;
                    }
                }
                draw_text: {
                    color: (TEXT_PRIMARY)
                    color_empty: (TEXT_MUTED)
                    text_style: { font_size: 12.0 }
                }
            }

            custom_domain_btn = <ProjectLaunchButton> {
                height: 32
                text: "Custom domain"
            }
        }

        <View> {
            width: Fill, height: Fit
            padding: {left: 14, right: 14, bottom: 4}
            summary_label = <Label> {
                draw_text: {
                    color: (TEXT_MUTED)
                    text_style: <FONT_REGULAR>{ font_size: 9.5 }
                }
            }
        }

        status_view = <View> {
            width: Fill, height: Fit
            padding: {left: 14, right: 14, top: 12, bottom: 12}
            visible: false
            status_label = <Label> {
                draw_text: {
                    color: (TEXT_SECONDARY)
                    text_style: <FONT_REGULAR>{ font_size: 11.0 }
                }
            }
        }

        project_list = <PortalList> {
            width: Fill, height: Fill
            flow: Down
            ProjectItem = <ProjectListItem> {}
        }
    }
}
