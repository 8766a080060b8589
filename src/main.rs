mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::LeaViewApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let mut state = AppState::default();

    // Sole CLI argument: path to the protein database.
    if let Some(arg) = std::env::args().nth(1) {
        match data::loader::load_file(Path::new(&arg)) {
            Ok(dataset) => {
                log::info!("Loaded {} proteins from {arg}", dataset.len());
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {arg}: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "LEA View – Arabidopsis LEA Proteins",
        options,
        Box::new(|_cc| Ok(Box::new(LeaViewApp::new(state)))),
    )
}
