//! UI theme definitions.

use egui::{Color32, Visuals};

use crate::storage::config::Theme;

/// Background of the highest value in each history column.
pub const HIGHLIGHT_MAX: Color32 = Color32::from_rgb(144, 238, 144);

/// Text drawn on top of `HIGHLIGHT_MAX`.
pub const HIGHLIGHT_TEXT: Color32 = Color32::from_rgb(20, 40, 20);

/// Get the egui Visuals for a theme.
pub fn visuals(theme: Theme) -> Visuals {
    match theme {
        Theme::Dark => dark_visuals(),
        Theme::Light => light_visuals(),
    }
}

/// The other theme.
pub fn toggled(theme: Theme) -> Theme {
    match theme {
        Theme::Dark => Theme::Light,
        Theme::Light => Theme::Dark,
    }
}

/// Icon for the theme toggle button.
pub fn toggle_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "🌙",
        Theme::Light => "☀",
    }
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(18, 20, 24);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(28, 30, 36);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(38, 41, 48);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);
    /// Accent color (orange, for calories)
    pub const ACCENT: Color32 = Color32::from_rgb(255, 112, 67);
    /// Success color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(52, 168, 83);
    /// Warning color (yellow/orange)
    pub const WARNING: Color32 = Color32::from_rgb(251, 188, 4);
    /// Error color (red)
    pub const ERROR: Color32 = Color32::from_rgb(234, 67, 53);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(60, 62, 70);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 252);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(245, 245, 248);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(32, 32, 40);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(96, 96, 104);
    /// Accent color (orange, for calories)
    pub const ACCENT: Color32 = Color32::from_rgb(230, 81, 0);
    /// Success color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(24, 128, 56);
    /// Warning color (yellow/orange)
    pub const WARNING: Color32 = Color32::from_rgb(234, 160, 0);
    /// Error color (red)
    pub const ERROR: Color32 = Color32::from_rgb(200, 50, 40);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(218, 218, 224);
}

/// Status colors that follow the active visuals.
pub fn success_color(ui: &egui::Ui) -> Color32 {
    if ui.visuals().dark_mode {
        DarkTheme::SUCCESS
    } else {
        LightTheme::SUCCESS
    }
}

pub fn warning_color(ui: &egui::Ui) -> Color32 {
    if ui.visuals().dark_mode {
        DarkTheme::WARNING
    } else {
        LightTheme::WARNING
    }
}

pub fn error_color(ui: &egui::Ui) -> Color32 {
    if ui.visuals().dark_mode {
        DarkTheme::ERROR
    } else {
        LightTheme::ERROR
    }
}

pub fn accent_color(ui: &egui::Ui) -> Color32 {
    if ui.visuals().dark_mode {
        DarkTheme::ACCENT
    } else {
        LightTheme::ACCENT
    }
}

/// Create dark theme visuals.
fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::PANEL_BG;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(52, 55, 64);
    visuals.widgets.active.bg_fill = DarkTheme::ACCENT;

    visuals.selection.bg_fill = DarkTheme::ACCENT.linear_multiply(0.4);
    visuals.selection.stroke.color = DarkTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = DarkTheme::TEXT_PRIMARY;

    visuals.widgets.noninteractive.bg_stroke.color = DarkTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = DarkTheme::BORDER;

    visuals
}

/// Create light theme visuals.
fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightTheme::PANEL_BG;
    visuals.panel_fill = LightTheme::PANEL_BG;
    visuals.faint_bg_color = LightTheme::CARD_BG;
    visuals.extreme_bg_color = LightTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(230, 230, 235);
    visuals.widgets.active.bg_fill = LightTheme::ACCENT;

    visuals.selection.bg_fill = LightTheme::ACCENT.linear_multiply(0.2);
    visuals.selection.stroke.color = LightTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = LightTheme::BORDER;

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(toggled(Theme::Dark), Theme::Light);
        assert_eq!(toggled(toggled(Theme::Dark)), Theme::Dark);
    }

    #[test]
    fn test_visuals_match_mode() {
        assert!(visuals(Theme::Dark).dark_mode);
        assert!(!visuals(Theme::Light).dark_mode);
    }
}
