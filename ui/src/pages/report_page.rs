//! The Best Practice Analyser page.

use bpa_business::{ReportFetchResult, pluralize};
use egui::{RichText, Ui};

use crate::state::State;
use crate::utils::colors::COLOR_RED;
use crate::widgets;

/// Render the report page into the central panel.
pub fn report_page(state: &mut State, ui: &mut Ui) {
    ui.heading("Best Practice Analyser");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        widgets::refresh_button(ui, &state.refresh, &mut state.confirm_open);
        if ui.button("⟳ Reload").clicked() {
            state.report.start(&state.config);
        }
        ui.separator();
        ui.label("Filter:");
        ui.text_edit_singleline(&mut state.table.filter);
        if let ReportFetchResult::Success(rows) = state.report.result() {
            ui.label(RichText::new(pluralize(rows.len() as u64, "tenant")).weak());
        }
    });
    ui.add_space(8.0);

    match state.report.result() {
        ReportFetchResult::Idle | ReportFetchResult::Pending => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading report…");
            });
        }
        ReportFetchResult::Error(err) => {
            ui.colored_label(COLOR_RED, format!("✘ {err}"));
            if ui.button("Retry").clicked() {
                state.report.start(&state.config);
            }
        }
        ReportFetchResult::Success(_) => {
            // Split borrow: the table reads rows while mutating sort/filter.
            let request = {
                let State { report, table, .. } = &mut *state;
                report
                    .rows()
                    .and_then(|rows| widgets::report_table(ui, rows, table))
            };
            if request.is_some() {
                state.modal = request;
            }
        }
    }

    // Drill-down modal, owned by this page's state.
    if let Some(request) = &state.modal {
        if !widgets::drill_down_modal(ui.ctx(), request) {
            state.modal = None;
        }
    }

    // Refresh confirmation dialog.
    let State {
        config,
        refresh,
        confirm_open,
        ..
    } = state;
    widgets::confirm_refresh_window(ui.ctx(), confirm_open, refresh, config);
}
