use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::Predictor;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – input features
// ---------------------------------------------------------------------------

/// Render the sidebar: group filter, protein selector, predictor selector.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Input Features");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state inside the widgets.
    let classes: Vec<String> = dataset.class_values.iter().cloned().collect();
    let proteins: Vec<(String, String)> = state
        .visible_indices
        .iter()
        .map(|&i| {
            let row = &dataset.table[i];
            (row.key.clone(), row.tair_protein.clone())
        })
        .collect();
    let colors = state.class_colors.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Acovs group multiselect ----
            ui.strong("Groups by Acovs");
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_classes();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_classes();
                }
            });
            for class in &classes {
                let mut checked = state.class_filter.contains(class);
                let mut text = RichText::new(class);
                if let Some(cm) = &colors {
                    text = text.color(cm.color_for(class));
                }
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_class(class);
                }
            }
            ui.separator();

            // ---- Protein selection (visible rows only) ----
            ui.strong("Protein selection");
            let current_label = state
                .selected_protein
                .as_ref()
                .and_then(|key| {
                    proteins
                        .iter()
                        .find(|(k, _)| k == key)
                        .map(|(_, label)| label.clone())
                })
                .unwrap_or_default();
            egui::ComboBox::from_id_salt("protein_select")
                .selected_text(current_label)
                .show_ui(ui, |ui: &mut Ui| {
                    for (key, label) in &proteins {
                        let selected = state.selected_protein.as_deref() == Some(key.as_str());
                        if ui.selectable_label(selected, label).clicked() {
                            state.set_selected_protein(key.clone());
                        }
                    }
                });
            ui.separator();

            // ---- Predictor selection ----
            ui.strong("Predictor to plot");
            egui::ComboBox::from_id_salt("predictor_select")
                .selected_text(state.selected_predictor.name())
                .show_ui(ui, |ui: &mut Ui| {
                    for predictor in Predictor::ALL {
                        if ui
                            .selectable_label(state.selected_predictor == predictor, predictor.name())
                            .clicked()
                        {
                            state.set_predictor(predictor);
                        }
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} proteins loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open LEA protein database")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} proteins, groups {:?}",
                    dataset.len(),
                    dataset.class_values
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load database: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
