use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LeaViewApp {
    pub state: AppState,
}

impl LeaViewApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LeaViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: input features ----
        egui::SidePanel::left("input_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table + charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            central_panel(ui, &mut self.state);
        });
    }
}

/// The central page: protein table, residue count section, predictor chart,
/// mirroring the original dashboard's three sections.
fn central_panel(ui: &mut egui::Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut egui::Ui| {
            ui.heading("Open a protein database to begin  (File → Open…)");
        });
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut egui::Ui| {
            ui.heading("LEA information for the selected group(s)");
            table::protein_table(ui, state);

            ui.separator();
            ui.heading("Aminoacid Residue Count");
            if state.residue_counts.is_empty() {
                ui.label("No protein selected.");
            } else {
                ui.push_id("residue_table", |ui: &mut egui::Ui| {
                    table::residue_table(ui, &state.residue_counts);
                });
                plot::residue_bars(ui, &state.residue_counts);
            }

            ui.separator();
            ui.heading(format!(
                "Results from {} predictor",
                state.selected_predictor
            ));
            if state.predictor_points.is_empty() {
                ui.label("No predictor data to plot.");
            } else {
                plot::predictor_area(ui, &state.predictor_points);
            }
        });
}
