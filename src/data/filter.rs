use std::collections::BTreeSet;

use super::model::{ProteinDataset, ProteinRow};

// ---------------------------------------------------------------------------
// Class filter: which Acovs groups are selected
// ---------------------------------------------------------------------------

/// The set of currently selected `ClassAcovs` values.
pub type ClassFilter = BTreeSet<String>;

/// Initialise a [`ClassFilter`] with every class selected (show everything),
/// matching the default of the group multiselect.
pub fn init_class_filter(dataset: &ProteinDataset) -> ClassFilter {
    dataset.class_values.clone()
}

/// Return indices of table rows whose `ClassAcovs` value is in the selected
/// set, preserving the table's relative order.
///
/// An empty selection yields an empty result on purpose: deselecting every
/// group shows nothing rather than falling back to the full table.
pub fn filtered_indices(table: &[ProteinRow], selected: &ClassFilter) -> Vec<usize> {
    table
        .iter()
        .enumerate()
        .filter(|(_, row)| selected.contains(&row.class_acovs))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_str;

    fn dataset() -> ProteinDataset {
        let doc = r#"{
            "k1": { "uniprot": "Q1", "tair_protein": "AT1G01470.1", "tair_gen": "AT1G01470",
                    "classification": { "ClassPFMA": "LEA_2", "ClassAcovs": "Group-1" },
                    "domains": { "PFAM": "PF03168" }, "parameters": { "GRAVY": -0.9 },
                    "sequence": "MAS", "predictors": {} },
            "k2": { "uniprot": "Q2", "tair_protein": "AT2G36640.1", "tair_gen": "AT2G36640",
                    "classification": { "ClassPFMA": "LEA_3", "ClassAcovs": "Group-2" },
                    "domains": { "PFAM": "PF03242" }, "parameters": { "GRAVY": -1.1 },
                    "sequence": "MQSA", "predictors": {} },
            "k3": { "uniprot": "Q3", "tair_protein": "AT3G15670.1", "tair_gen": "AT3G15670",
                    "classification": { "ClassPFMA": "LEA_2", "ClassAcovs": "Group-1" },
                    "domains": { "PFAM": "PF03168" }, "parameters": { "GRAVY": -0.4 },
                    "sequence": "MADST", "predictors": {} }
        }"#;
        load_str(doc).unwrap()
    }

    #[test]
    fn empty_selection_yields_no_rows() {
        let ds = dataset();
        assert!(filtered_indices(&ds.table, &ClassFilter::new()).is_empty());
    }

    #[test]
    fn full_selection_yields_the_whole_table_in_order() {
        let ds = dataset();
        let all = init_class_filter(&ds);
        assert_eq!(filtered_indices(&ds.table, &all), vec![0, 1, 2]);
    }

    #[test]
    fn single_class_keeps_relative_order() {
        let ds = dataset();
        let one: ClassFilter = ["Group-1".to_string()].into_iter().collect();
        let idx = filtered_indices(&ds.table, &one);
        assert_eq!(idx, vec![0, 2]);
        assert!(idx.iter().all(|&i| ds.table[i].class_acovs == "Group-1"));
    }

    #[test]
    fn filtering_does_not_touch_the_table() {
        let ds = dataset();
        let before = ds.table.clone();
        let one: ClassFilter = ["Group-2".to_string()].into_iter().collect();
        let _ = filtered_indices(&ds.table, &one);
        assert_eq!(ds.table, before);
    }
}
