//! API status indicator for the top bar.
//!
//! A small colored dot reflecting the most recent report fetch: green when
//! the API answered, red when it failed, amber while checking. The tooltip
//! carries the console version and the error detail, if any.

use bpa_business::{ReportFetch, ReportFetchResult, version_info};
use egui::{Color32, Response, Ui};

use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_RED};

/// Radius of the status indicator circle (in pixels)
const STATUS_DOT_RADIUS: f32 = 5.0;

fn status_info(fetch: &ReportFetch) -> (String, Color32) {
    let version = version_info::format_env_version();
    match fetch.result() {
        ReportFetchResult::Success(_) => (format!("{version}\nService: api"), COLOR_GREEN),
        ReportFetchResult::Error(err) => (format!("{version}\nService: api({err})"), COLOR_RED),
        ReportFetchResult::Idle | ReportFetchResult::Pending => {
            (format!("{version}\nService: checking"), COLOR_AMBER)
        }
    }
}

/// Draw the status dot with its tooltip.
pub fn status_dot(ui: &mut Ui, fetch: &ReportFetch) -> Response {
    let (tooltip, color) = status_info(fetch);

    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(STATUS_DOT_RADIUS * 2.0, STATUS_DOT_RADIUS * 2.0),
        egui::Sense::hover(),
    );
    let center = rect.center();
    ui.painter()
        .circle(center, STATUS_DOT_RADIUS, color, egui::Stroke::NONE);

    response.on_hover_text(tooltip)
}

#[cfg(test)]
mod status_dot_test {
    use super::*;

    #[test]
    fn test_status_info_colors() {
        let fetch = ReportFetch::default();
        let (tooltip, color) = status_info(&fetch);
        assert_eq!(color, COLOR_AMBER);
        assert!(tooltip.contains("checking"));
    }
}
