//! Shared color constants for the UI.

use egui::Color32;

/// Forest green for compliant/success states.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for failing/danger states.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber for warning and pending states.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Blue for informational badges such as "No Data".
pub const COLOR_BLUE: Color32 = Color32::from_rgb(13, 110, 253);
