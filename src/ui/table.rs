use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::TABLE_COLUMNS;
use crate::data::stats::ResidueCount;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Flattened protein table
// ---------------------------------------------------------------------------

/// Render the filtered protein table; clicking a row selects that protein.
pub fn protein_table(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    ui.label(format!(
        "Data Dimension: {} rows and {} columns.",
        state.visible_indices.len(),
        TABLE_COLUMNS.len()
    ));

    let mut clicked: Option<String> = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .sense(egui::Sense::click())
        .max_scroll_height(280.0)
        .columns(Column::auto().at_least(60.0), TABLE_COLUMNS.len())
        .header(20.0, |mut header| {
            for title in TABLE_COLUMNS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            let visible = &state.visible_indices;
            body.rows(18.0, visible.len(), |mut table_row| {
                let row = &dataset.table[visible[table_row.index()]];
                table_row
                    .set_selected(state.selected_protein.as_deref() == Some(row.key.as_str()));

                table_row.col(|ui| {
                    ui.label(&row.uniprot);
                });
                table_row.col(|ui| {
                    ui.label(&row.tair_protein);
                });
                table_row.col(|ui| {
                    ui.label(&row.tair_gene);
                });
                table_row.col(|ui| {
                    ui.label(&row.class_pfam);
                });
                table_row.col(|ui| {
                    let mut text = RichText::new(&row.class_acovs);
                    if let Some(cm) = &state.class_colors {
                        text = text.color(cm.color_for(&row.class_acovs));
                    }
                    ui.label(text);
                });
                table_row.col(|ui| {
                    ui.label(&row.pfam);
                });
                table_row.col(|ui| {
                    ui.label(format!("{:.3}", row.gravy));
                });
                table_row.col(|ui| {
                    ui.label(row.length.to_string());
                });

                if table_row.response().clicked() {
                    clicked = Some(row.key.clone());
                }
            });
        });

    if let Some(key) = clicked {
        state.set_selected_protein(key);
    }
}

// ---------------------------------------------------------------------------
// Residue count table
// ---------------------------------------------------------------------------

/// Render the residue tally of the selected protein, count-descending.
pub fn residue_table(ui: &mut Ui, counts: &[ResidueCount]) {
    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(220.0)
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(90.0))
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Aminoacid");
            });
            header.col(|ui| {
                ui.strong("Count");
            });
            header.col(|ui| {
                ui.strong("Percentage");
            });
        })
        .body(|body| {
            body.rows(18.0, counts.len(), |mut row| {
                let rc = &counts[row.index()];
                row.col(|ui| {
                    ui.label(rc.residue.to_string());
                });
                row.col(|ui| {
                    ui.label(rc.count.to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.2}", rc.percentage));
                });
            });
        });
}
