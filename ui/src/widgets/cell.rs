//! Rendering of [`CellDisplay`] values inside the compliance table.

use bpa_business::{BadgeColor, CellDisplay, DrillDownKind};
use egui::{Color32, Response, RichText, Ui};

use crate::utils::colors::{COLOR_AMBER, COLOR_BLUE, COLOR_GREEN, COLOR_RED};

fn badge_fill(color: BadgeColor) -> Color32 {
    match color {
        BadgeColor::Success => COLOR_GREEN,
        BadgeColor::Danger => COLOR_RED,
        BadgeColor::Warning => COLOR_AMBER,
        BadgeColor::Info => COLOR_BLUE,
    }
}

/// A small rounded badge with a colored fill.
pub fn badge(ui: &mut Ui, label: &str, color: BadgeColor) -> Response {
    egui::Frame::NONE
        .fill(badge_fill(color))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(Color32::WHITE).small());
        })
        .response
}

/// Render one cell. Returns the drill-down kind when the cell's button was
/// clicked this frame.
pub fn cell_display(ui: &mut Ui, cell: &CellDisplay) -> Option<DrillDownKind> {
    match cell {
        CellDisplay::Text(text) => {
            ui.label(text);
            None
        }
        CellDisplay::Pass => {
            ui.colored_label(COLOR_GREEN, "✔");
            None
        }
        CellDisplay::Fail { warning } => {
            let color = if *warning { COLOR_AMBER } else { COLOR_RED };
            ui.colored_label(color, "✘");
            None
        }
        CellDisplay::Badge { label, color } => {
            badge(ui, label, *color);
            None
        }
        CellDisplay::Progress(percentage) => {
            let fraction = (*percentage as f32 / 100.0).clamp(0.0, 1.0);
            ui.add(
                egui::ProgressBar::new(fraction)
                    .desired_width(96.0)
                    .show_percentage(),
            );
            None
        }
        CellDisplay::DrillDown { label, kind } => {
            let button =
                egui::Button::new(RichText::new(label).color(Color32::WHITE)).fill(COLOR_RED);
            if ui.add(button).clicked() {
                Some(*kind)
            } else {
                None
            }
        }
        CellDisplay::NoData => {
            badge(ui, "No Data", BadgeColor::Info);
            None
        }
    }
}
