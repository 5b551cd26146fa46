//! Drill-down modal.
//!
//! One window, two modes: a plain entry list (shared mailboxes, message
//! copy) or the unused-license table. The page owns the open/closed state;
//! this widget only reports when the user closed it.

use bpa_business::ModalRequest;
use egui::{Align2, Context, RichText, Ui, Vec2};
use egui_extras::{Column as TableColumn, TableBuilder};

/// Render the modal for `request`. Returns `false` once the user closed it.
pub fn drill_down_modal(ctx: &Context, request: &ModalRequest) -> bool {
    let mut keep_open = true;

    egui::Window::new(request.title())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            match request {
                ModalRequest::List { items, .. } => render_list(ui, items),
                ModalRequest::Licenses { records, .. } => render_licenses(ui, records),
            }

            ui.add_space(12.0);
            if ui.button("Close").clicked() {
                keep_open = false;
            }
        });

    keep_open
}

fn render_list(ui: &mut Ui, items: &[String]) {
    if items.is_empty() {
        ui.label(RichText::new("No entries.").italics());
        return;
    }
    egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
        for item in items {
            ui.label(item);
        }
    });
}

fn render_licenses(ui: &mut Ui, records: &[bpa_business::LicenseRecord]) {
    if records.is_empty() {
        ui.label(RichText::new("No entries.").italics());
        return;
    }
    TableBuilder::new(ui)
        .striped(true)
        .columns(TableColumn::auto().at_least(96.0), 3)
        .header(20.0, |mut header| {
            for title in ["SKU", "Purchased", "Consumed"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for record in records {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&record.sku);
                    });
                    row.col(|ui| {
                        ui.label(&record.purchased);
                    });
                    row.col(|ui| {
                        ui.label(&record.consumed);
                    });
                });
            }
        });
}
