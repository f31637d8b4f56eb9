use makepad_widgets::*;

live_design! {
    use link::theme::*;

    // Typography
    pub FONT_REGULAR = <THEME_FONT_REGULAR> {}
    pub FONT_BOLD = <THEME_FONT_BOLD> {}

    // Colors
    pub WHITE = #ffffff
    pub APP_BG = #f5f7fa
    pub PANEL_BG = #ffffff
    pub BORDER = #e5e7eb
    pub HOVER_BG = #f1f5f9
    pub TEXT_PRIMARY = #1f2937
    pub TEXT_SECONDARY = #4b5563
    pub TEXT_MUTED = #9ca3af
    pub ACCENT = #3b82f6
    pub ACCENT_HOVER = #x2563eb
}
