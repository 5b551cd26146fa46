//! The compliance table.
//!
//! Declarative rendering over `bpa_business::columns()`: headers toggle
//! sorting, rows render through the cell policies, and a click on a
//! drill-down cell bubbles up as a [`ModalRequest`] for the page to open.

use bpa_business::{ComplianceRow, ModalRequest, columns, drill_down};
use egui::Ui;
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::state::TableState;

/// Render the table. Returns a modal request when a drill-down cell was
/// clicked this frame.
pub fn report_table(
    ui: &mut Ui,
    rows: &[ComplianceRow],
    table: &mut TableState,
) -> Option<ModalRequest> {
    let filter = table.filter.trim().to_lowercase();
    let mut visible: Vec<&ComplianceRow> = rows
        .iter()
        .filter(|row| filter.is_empty() || row.tenant.to_lowercase().contains(&filter))
        .collect();

    if let Some((index, ascending)) = table.sort {
        if let Some(column) = columns().get(index) {
            visible.sort_by(|a, b| {
                let ordering = column.cmp_rows(a, b);
                if ascending { ordering } else { ordering.reverse() }
            });
        }
    }

    let mut request = None;
    let mut clicked_header = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(TableColumn::auto().at_least(140.0))
        .columns(TableColumn::auto().at_least(72.0), columns().len() - 1)
        .header(24.0, |mut header| {
            for (index, column) in columns().iter().enumerate() {
                header.col(|ui| {
                    let selected = table.sort.is_some_and(|(active, _)| active == index);
                    let marker = match table.sort {
                        Some((active, true)) if active == index => " ⏶",
                        Some((active, false)) if active == index => " ⏷",
                        _ => "",
                    };
                    let label = format!("{}{marker}", column.title);
                    if ui.selectable_label(selected, label).clicked() {
                        clicked_header = Some(index);
                    }
                });
            }
        })
        .body(|mut body| {
            for row in &visible {
                body.row(22.0, |mut table_row| {
                    for column in columns() {
                        table_row.col(|ui| {
                            if let Some(kind) = super::cell_display(ui, &column.display(row)) {
                                request = Some(drill_down(kind, row));
                            }
                        });
                    }
                });
            }
        });

    if let Some(index) = clicked_header {
        table.toggle_sort(index);
    }

    request
}

#[cfg(test)]
mod report_table_test {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable as _;

    fn sample_rows() -> Vec<ComplianceRow> {
        vec![
            ComplianceRow {
                tenant: "contoso.example".to_owned(),
                unified_audit_log: Some(true),
                disabled_shared_mailbox_logins_count: Some(2),
                disabled_shared_mailbox_logins: Some("a@contoso<br />b@contoso".to_owned()),
                ..Default::default()
            },
            ComplianceRow {
                tenant: "fabrikam.example".to_owned(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_table_renders_tenants_and_headers() {
        let rows = sample_rows();
        let mut table = TableState::default();
        let harness = Harness::new_ui(|ui| {
            report_table(ui, &rows, &mut table);
        });
        assert!(harness.query_by_label_contains("Tenant").is_some());
        assert!(harness.query_by_label_contains("Secure Score").is_some());
        assert!(harness.query_by_label_contains("contoso.example").is_some());
        assert!(harness.query_by_label_contains("fabrikam.example").is_some());
    }

    #[test]
    fn test_table_shows_drill_down_count() {
        let rows = sample_rows();
        let mut table = TableState::default();
        let harness = Harness::new_ui(|ui| {
            report_table(ui, &rows, &mut table);
        });
        assert!(harness.query_by_label_contains("2 Users").is_some());
    }

    #[test]
    fn test_filter_hides_non_matching_tenants() {
        let rows = sample_rows();
        let mut table = TableState {
            filter: "contoso".to_owned(),
            ..Default::default()
        };
        let harness = Harness::new_ui(|ui| {
            report_table(ui, &rows, &mut table);
        });
        assert!(harness.query_by_label_contains("contoso.example").is_some());
        assert!(harness.query_by_label_contains("fabrikam.example").is_none());
    }
}
