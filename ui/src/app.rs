use std::time::Duration;

use crate::{pages, state::State, widgets};

pub struct BpaApp {
    state: State,
}

impl BpaApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for BpaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain completed network calls before rendering.
        self.state.report.poll();
        self.state.refresh.poll();

        // First frame: kick off the initial report fetch.
        if self.state.report.is_idle() {
            self.state.report.start(&self.state.config);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                widgets::status_dot(ui, &self.state.report);
                ui.label(
                    egui::RichText::new(bpa_business::version_info::format_env_version()).weak(),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            pages::report_page(&mut self.state, ui);
        });

        // Keep polling while a call is in flight.
        if self.state.report.is_pending() || self.state.refresh.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
