// UI constants extracted from scattered magic numbers across the codebase.

use eframe::egui::Color32;

/// Width of the filters side panel
pub const FILTERS_PANEL_WIDTH: f32 = 260.0;

/// UI spacing constants
pub mod spacing {
    /// Small spacing (4px)
    pub const SMALL: f32 = 4.0;

    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;

    /// Large spacing (16px)
    pub const LARGE: f32 = 16.0;

    /// Extra large spacing (24px)
    pub const XLARGE: f32 = 24.0;
}

/// Filter-widget layout constants
pub mod filter {
    /// Border radius shared by filter containers and popups
    pub const ROUNDING: f32 = 6.0;

    /// Side of the painted checkbox square
    pub const CHECKBOX_SIZE: f32 = 14.0;

    /// Max height of the autocomplete suggestion popup
    pub const POPUP_MAX_HEIGHT: f32 = 240.0;
}

/// Shared dark palette for the filter panel and popups
pub mod palette {
    use super::Color32;

    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(30, 30, 30);

    /// Popup / overlay background
    pub const POPUP_BG: Color32 = Color32::from_rgb(28, 28, 28);

    /// Default widget border
    pub const BORDER: Color32 = Color32::from_gray(80);

    /// Accent (active controls, checked boxes)
    pub const ACCENT: Color32 = Color32::from_rgb(210, 85, 85);

    /// Softer accent for secondary marks
    pub const ACCENT_SOFT: Color32 = Color32::from_rgb(214, 120, 120);

    /// Hover wash over rows and segments
    pub const HOVER: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 6);

    /// Primary text
    pub const TEXT: Color32 = Color32::from_gray(210);

    /// Dimmed text (counts, placeholders)
    pub const TEXT_WEAK: Color32 = Color32::from_gray(140);

    /// Error text
    pub const ERROR: Color32 = Color32::from_rgb(230, 140, 140);
}
