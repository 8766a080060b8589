use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: Acovs class → Color32
// ---------------------------------------------------------------------------

/// Maps each `ClassAcovs` label to a stable colour for the filter checkboxes
/// and the table's class column.
#[derive(Debug, Clone)]
pub struct ClassColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ClassColors {
    /// Build a colour map over the dataset's distinct class labels.
    pub fn new(classes: &BTreeSet<String>) -> Self {
        let palette = generate_palette(classes.len());
        let mapping: BTreeMap<String, Color32> = classes
            .iter()
            .zip(palette.into_iter())
            .map(|(class, c): (&String, Color32)| (class.clone(), c))
            .collect();

        ClassColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a class label.
    pub fn color_for(&self, class: &str) -> Color32 {
        self.mapping
            .get(class)
            .copied()
            .unwrap_or(self.default_color)
    }
}
