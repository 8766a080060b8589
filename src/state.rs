use crate::color::ClassColors;
use crate::data::error::DatasetError;
use crate::data::filter::{filtered_indices, init_class_filter, ClassFilter};
use crate::data::model::{Predictor, ProteinDataset};
use crate::data::stats::{count_residues, predictor_series, PredictorPoint, ResidueCount};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is loaded once and never mutated; every derived view below it
/// (visible rows, residue counts, predictor series) is recomputed from
/// scratch whenever a selection changes.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<ProteinDataset>,

    /// Selected Acovs groups.
    pub class_filter: ClassFilter,

    /// Indices of table rows passing the class filter (cached).
    pub visible_indices: Vec<usize>,

    /// Record key of the selected protein, if any.
    pub selected_protein: Option<String>,

    /// Predictor whose score track is plotted.
    pub selected_predictor: Predictor,

    /// Residue tally of the selected protein (cached derived view).
    pub residue_counts: Vec<ResidueCount>,

    /// Score series of the selected protein and predictor (cached).
    pub predictor_points: Vec<PredictorPoint>,

    /// Colours for the Acovs classes.
    pub class_colors: Option<ClassColors>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            class_filter: ClassFilter::default(),
            visible_indices: Vec::new(),
            selected_protein: None,
            selected_predictor: Predictor::Fuzzpred,
            residue_counts: Vec::new(),
            predictor_points: Vec::new(),
            class_colors: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: all classes selected, first row
    /// selected, derived views computed.
    pub fn set_dataset(&mut self, dataset: ProteinDataset) {
        self.class_filter = init_class_filter(&dataset);
        self.visible_indices = (0..dataset.len()).collect();
        self.class_colors = Some(ClassColors::new(&dataset.class_values));
        self.selected_protein = dataset.table.first().map(|row| row.key.clone());
        self.dataset = Some(dataset);
        self.status_message = None;
        self.recompute_derived();
    }

    /// Recompute `visible_indices` after a filter change, and move the
    /// selection to the first visible row if the current one got filtered
    /// out.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        self.visible_indices = filtered_indices(&ds.table, &self.class_filter);

        let still_visible = self.selected_protein.as_ref().is_some_and(|key| {
            self.visible_indices
                .iter()
                .any(|&i| ds.table[i].key == *key)
        });
        if !still_visible {
            self.selected_protein = self
                .visible_indices
                .first()
                .map(|&i| ds.table[i].key.clone());
            self.recompute_derived();
        }
    }

    /// Toggle a single Acovs group in the filter.
    pub fn toggle_class(&mut self, class: &str) {
        if !self.class_filter.remove(class) {
            self.class_filter.insert(class.to_string());
        }
        self.refilter();
    }

    /// Select every Acovs group.
    pub fn select_all_classes(&mut self) {
        if let Some(ds) = &self.dataset {
            self.class_filter = ds.class_values.clone();
        }
        self.refilter();
    }

    /// Deselect every Acovs group. Shows an empty table on purpose.
    pub fn select_no_classes(&mut self) {
        self.class_filter.clear();
        self.refilter();
    }

    /// Select a protein by record key and recompute its derived views.
    pub fn set_selected_protein(&mut self, key: String) {
        self.selected_protein = Some(key);
        self.recompute_derived();
    }

    /// Switch the plotted predictor and recompute the score series.
    pub fn set_predictor(&mut self, predictor: Predictor) {
        self.selected_predictor = predictor;
        self.recompute_derived();
    }

    /// Rebuild the residue tally and predictor series for the current
    /// selection. A failure clears the affected view and surfaces the error;
    /// nothing is retried.
    fn recompute_derived(&mut self) {
        self.residue_counts.clear();
        self.predictor_points.clear();
        self.status_message = None;

        let (Some(ds), Some(key)) = (&self.dataset, &self.selected_protein) else {
            return;
        };

        match self.derive_views(ds, key) {
            Ok((counts, points)) => {
                self.residue_counts = counts;
                self.predictor_points = points;
            }
            Err(e) => {
                log::error!("recomputing views for '{key}': {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    fn derive_views(
        &self,
        ds: &ProteinDataset,
        key: &str,
    ) -> Result<(Vec<ResidueCount>, Vec<PredictorPoint>), DatasetError> {
        let record = ds.record(key)?;
        let counts = count_residues(&record.sequence)?;
        let points = predictor_series(record, self.selected_predictor)?;
        Ok((counts, points))
    }
}
