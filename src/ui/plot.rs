use std::ops::RangeInclusive;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoints};

use crate::data::stats::{PredictorPoint, ResidueCount};

/// Line/fill colour of the predictor chart, the original app's darkblue.
const DARK_BLUE: Color32 = Color32::from_rgb(0, 0, 139);
/// Bar colour of the residue chart.
const STEEL_BLUE: Color32 = Color32::from_rgb(70, 130, 180);

// ---------------------------------------------------------------------------
// Residue count bar chart
// ---------------------------------------------------------------------------

/// Bar chart of residue counts, one bar per distinct residue, in the
/// count-descending order the tally comes in.
pub fn residue_bars(ui: &mut Ui, counts: &[ResidueCount]) {
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, rc)| {
            Bar::new(i as f64, rc.count as f64)
                .name(format!("{}: {} ({:.1}%)", rc.residue, rc.count, rc.percentage))
                .width(0.7)
                .fill(STEEL_BLUE)
        })
        .collect();

    let labels: Vec<char> = counts.iter().map(|rc| rc.residue).collect();

    Plot::new("residue_bars")
        .height(240.0)
        .y_axis_label("Count")
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            // Residue letters sit at integer positions; hide fractional marks.
            let i = mark.value.round();
            if (mark.value - i).abs() < 1e-6 && i >= 0.0 && (i as usize) < labels.len() {
                labels[i as usize].to_string()
            } else {
                String::new()
            }
        })
        .allow_scroll(false)
        .allow_drag(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Predictor score area chart
// ---------------------------------------------------------------------------

/// Area chart of the predictor score track over 1-based sequence positions.
pub fn predictor_area(ui: &mut Ui, points: &[PredictorPoint]) {
    let series: PlotPoints = points
        .iter()
        .map(|p| [p.position as f64, p.score])
        .collect();

    let line = Line::new(series)
        .color(DARK_BLUE)
        .width(1.5)
        .fill(0.0);

    Plot::new("predictor_area")
        .height(240.0)
        .x_axis_label("Position")
        .y_axis_label("Score")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}
