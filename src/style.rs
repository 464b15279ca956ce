//! Colors for the translations table.

use egui::{Color32, Stroke, Visuals};

pub const PANEL_FILL: Color32 = Color32::from_rgb(30, 33, 40);
pub const HEADING_FILL: Color32 = Color32::from_rgb(48, 54, 66);
pub const TEXT: Color32 = Color32::from_rgb(220, 224, 230);
/// Placeholders and hints.
pub const TEXT_MUTED: Color32 = Color32::from_rgb(128, 136, 150);
/// Rows translated into every language.
pub const COMPLETE: Color32 = Color32::from_rgb(120, 196, 140);
pub const ROW_SEPARATOR: Stroke = Stroke {
    width: 1.0,
    color: Color32::from_rgb(44, 48, 58),
};

pub fn apply_visuals(visuals: &mut Visuals) {
    visuals.panel_fill = PANEL_FILL;
    visuals.override_text_color = Some(TEXT);
}
