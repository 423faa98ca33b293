use eframe::egui;

/// Dark Mode Design System
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(26, 26, 26); // #1A1A1A
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(26, 26, 26);
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(43, 43, 43); // #2B2B2B
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(33, 33, 33);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(31, 106, 165); // #1F6AA5 (Blue)
    pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(20, 72, 122);

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 204, 150); // #00CC96
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(255, 23, 68); // #FF1744
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(255, 145, 0); // #FF9100

    // Chart
    pub const CHART_LINE: egui::Color32 = Self::SUCCESS;
    pub const CHART_HIGHLIGHT: egui::Color32 = egui::Color32::YELLOW;

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 240, 240);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(160);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(64, 64, 64);

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: f32 = 8.0;

    pub const SPACING_SMALL: f32 = 5.0;
    pub const SPACING_MEDIUM: f32 = 10.0;
    pub const SPACING_LARGE: f32 = 20.0;

    pub const RESULT_TEXT_SIZE: f32 = 16.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.inactive.weak_bg_fill = Self::ACCENT_PRIMARY;
        visuals.widgets.inactive.bg_fill = Self::ACCENT_PRIMARY;

        visuals.widgets.hovered.weak_bg_fill = Self::ACCENT_SECONDARY;
        visuals.widgets.hovered.bg_fill = Self::ACCENT_SECONDARY;
        visuals.widgets.active.bg_fill = Self::ACCENT_SECONDARY;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.5);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Application Main Layout Frame
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
