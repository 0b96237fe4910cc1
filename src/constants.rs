//! Application-wide constants and default values
//!
//! This module centralizes all magic numbers and default values used throughout
//! the application, making them easier to maintain and configure.

/// Temperature color scale
pub mod scale {
    use egui::Color32;

    /// Cut points (°C) between the nine buckets
    pub const THRESHOLDS: [f64; 8] = [3.0, 6.0, 9.0, 12.0, 15.0, 18.0, 21.0, 24.0];

    /// RdYlBu, nine classes, reversed so that the coldest bucket is blue
    pub const PALETTE: [Color32; 9] = [
        Color32::from_rgb(0x45, 0x75, 0xb4),
        Color32::from_rgb(0x74, 0xad, 0xd1),
        Color32::from_rgb(0xab, 0xd9, 0xe9),
        Color32::from_rgb(0xe0, 0xf3, 0xf8),
        Color32::from_rgb(0xff, 0xff, 0xbf),
        Color32::from_rgb(0xfe, 0xe0, 0x90),
        Color32::from_rgb(0xfd, 0xae, 0x61),
        Color32::from_rgb(0xf4, 0x6d, 0x43),
        Color32::from_rgb(0xd7, 0x30, 0x27),
    ];

    /// Fill for regions without an observation
    pub const NO_DATA: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);
}

/// Map shape weights
pub mod map {
    use egui::Color32;

    /// Logical size of the projected map (view box units)
    pub const VIEW_BOX: [f64; 2] = [1000.0, 600.0];

    /// Fill opacity at rest
    pub const BASE_OPACITY: f32 = 0.7;

    /// Fill opacity while hovered
    pub const HOVER_OPACITY: f32 = 1.0;

    /// Outline width at rest
    pub const BASE_STROKE: f32 = 0.5;

    /// Outline width while hovered
    pub const HOVER_STROKE: f32 = 1.5;

    /// Outline color
    pub const STROKE_COLOR: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

    /// Regions left out of the rendered map
    pub const EXCLUDED_REGIONS: [&str; 3] = ["Alaska", "Hawaii", "Puerto Rico"];

    /// Where a selected region is moved, as fractions of the view box
    pub const REPOSITION_TARGET: [f64; 2] = [0.05, 0.375];
}

/// Drill-down chart
pub mod subplot {
    use egui::Color32;

    /// Padding (°C) added to both ends of the temperature axis
    pub const Y_PADDING: f64 = 0.3;

    /// Tick count used when nice-rounding axis domains
    pub const NICE_TICKS: usize = 10;

    /// Samples per segment when drawing monotone curves
    pub const CURVE_SAMPLES: usize = 8;

    pub const STATE_COLOR: Color32 = Color32::from_rgb(0x00, 0x7a, 0xcc);
    pub const STATE_WIDTH: f32 = 2.5;
    pub const NATIONAL_COLOR: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);
    pub const NATIONAL_WIDTH: f32 = 2.0;
    pub const YEAR_LINE_COLOR: Color32 = Color32::from_rgb(0xa3, 0x00, 0x00);
    pub const YEAR_LINE_WIDTH: f32 = 1.5;
    pub const TREND_WIDTH: f32 = 1.0;
}

/// UI layout defaults
pub mod layout {
    /// Default window size
    pub const WINDOW_SIZE: [f32; 2] = [1280.0, 800.0];

    /// Height of the prompt row above the map
    pub const PROMPT_HEIGHT: f32 = 24.0;

    /// Legend box size
    pub const LEGEND_WIDTH: f32 = 140.0;

    pub const MODEL_SELECTOR_WIDTH: f32 = 180.0;
    pub const LEGEND_ROW_HEIGHT: f32 = 22.0;
    pub const LEGEND_SWATCH_WIDTH: f32 = 25.0;

    /// Share of the map area taken by the drill-down chart
    pub const SUBPLOT_FRACTION: f32 = 0.72;

    /// Standard UI element padding
    pub const STANDARD_PADDING: f32 = 10.0;
}

/// Text shown in the UI
pub mod text {
    pub const PROMPT_UNSELECTED: &str =
        "Click a state to see temperature data aggregated by the chosen state";
    pub const LEGEND_TITLE: &str = "Temperature (°C)";
    pub const NO_DATA: &str = "No Data";
}

/// Numeric precision constants
pub mod numeric {
    /// Floating point comparison epsilon
    pub const EPSILON: f64 = 1e-12;
}

/// Configuration file paths
pub mod config {
    /// Configuration file looked up in the working directory
    pub const CONFIG_FILE: &str = "climate-atlas.json";
}
