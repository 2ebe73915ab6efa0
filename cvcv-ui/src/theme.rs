use egui::{Color32, Context, Visuals};

/// Colours used across the window.
pub struct Theme {
    pub dark_bg: Color32,
    pub panel_bg: Color32,
    pub card_bg: Color32,
    pub accent: Color32,
    pub accent2: Color32,
    pub success: Color32,
    pub warn: Color32,
    pub error: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub border: Color32,
}

pub const THEME: Theme = Theme {
    dark_bg: Color32::from_rgb(0x0e, 0x0e, 0x12),
    panel_bg: Color32::from_rgb(0x16, 0x16, 0x1d),
    card_bg: Color32::from_rgb(0x1c, 0x1c, 0x26),
    accent: Color32::from_rgb(0x7c, 0x6a, 0xf7),
    accent2: Color32::from_rgb(0x4f, 0xc3, 0xf7),
    success: Color32::from_rgb(0x43, 0xd9, 0xa0),
    warn: Color32::from_rgb(0xf5, 0xa6, 0x23),
    error: Color32::from_rgb(0xc0, 0x60, 0x60),
    text_primary: Color32::from_rgb(0xf0, 0xee, 0xff),
    text_muted: Color32::from_rgb(0x6e, 0x6e, 0x8a),
    border: Color32::from_rgb(0x2a, 0x2a, 0x3a),
};

impl Theme {
    /// Applies the palette to egui's dark visuals.
    pub fn apply(&self, ctx: &Context) {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = self.panel_bg;
        visuals.window_fill = self.card_bg;
        visuals.extreme_bg_color = self.dark_bg;
        visuals.faint_bg_color = self.card_bg;
        visuals.selection.bg_fill = self.accent;
        visuals.hyperlink_color = self.accent2;
        visuals.override_text_color = Some(self.text_primary);
        visuals.widgets.noninteractive.bg_stroke.color = self.border;
        ctx.set_visuals(visuals);
    }
}
