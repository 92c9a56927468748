use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_window: Color32,
    pub bg_field: Color32,
    pub outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_send: Color32,
    pub accent_danger: Color32,
    pub user_text: Color32,
    pub bot_text: Color32,
    pub warning: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_window: Color32::from_rgb(240, 240, 240),
        bg_field: Color32::WHITE,
        outline: Color32::from_rgb(210, 210, 214),
        text_primary: Color32::from_rgb(28, 28, 30),
        text_muted: Color32::from_rgb(110, 112, 118),
        accent_send: Color32::from_rgb(0, 122, 204),
        accent_danger: Color32::from_rgb(230, 57, 70),
        user_text: Color32::from_rgb(28, 28, 30),
        bot_text: Color32::from_rgb(0, 94, 160),
        warning: Color32::from_rgb(192, 138, 43),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_window;
    visuals.panel_fill = palette.bg_window;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_field;
    visuals.faint_bg_color = palette.bg_field;
    visuals.warn_fg_color = palette.warning;
    visuals.error_fg_color = palette.accent_danger;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_send);
    visuals.widgets.noninteractive.bg_fill = palette.bg_window;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    flatten(&mut visuals.widgets.inactive, palette);
    flatten(&mut visuals.widgets.hovered, palette);
    flatten(&mut visuals.widgets.active, palette);
    visuals.window_corner_radius = CornerRadius::same(4);
    visuals.popup_shadow = Shadow::NONE;
}

fn flatten(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(2);
    vis.bg_stroke = Stroke::new(1.0, palette.outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
}

pub fn status_badge(tone: StatusTone) -> (&'static str, Color32) {
    match tone {
        StatusTone::Idle => ("Ready", Color32::from_rgb(150, 150, 150)),
        StatusTone::Busy => ("Typing", Color32::from_rgb(31, 139, 255)),
        StatusTone::Info => ("Info", Color32::from_rgb(64, 140, 112)),
        StatusTone::Warning => ("Warning", Color32::from_rgb(192, 138, 43)),
    }
}
