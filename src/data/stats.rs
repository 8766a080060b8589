use super::error::DatasetError;
use super::model::{Predictor, ProteinRecord};

// ---------------------------------------------------------------------------
// Residue counting
// ---------------------------------------------------------------------------

/// One row of the residue-count table.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueCount {
    /// Single-character amino-acid symbol, exactly as it appears in the
    /// sequence (case-sensitive).
    pub residue: char,
    pub count: usize,
    /// `100 * count / sequence length`.
    pub percentage: f64,
}

/// Tally residue occurrences in a sequence.
///
/// Rows are sorted by count, descending. Ties keep the order in which the
/// residues first appear in the sequence (first-encounter accumulation plus a
/// stable sort), so the displayed order is deterministic.
///
/// Fails with [`DatasetError::EmptySequence`] for an empty input; the
/// percentage column would otherwise divide by zero.
pub fn count_residues(sequence: &str) -> Result<Vec<ResidueCount>, DatasetError> {
    if sequence.is_empty() {
        return Err(DatasetError::EmptySequence);
    }

    // First-encounter order; the alphabet is ~20 symbols, a linear scan per
    // character is fine.
    let mut tally: Vec<(char, usize)> = Vec::new();
    let mut total = 0usize;
    for symbol in sequence.chars() {
        total += 1;
        match tally.iter_mut().find(|(c, _)| *c == symbol) {
            Some((_, n)) => *n += 1,
            None => tally.push((symbol, 1)),
        }
    }

    let mut rows: Vec<ResidueCount> = tally
        .into_iter()
        .map(|(residue, count)| ResidueCount {
            residue,
            count,
            percentage: 100.0 * count as f64 / total as f64,
        })
        .collect();
    // sort_by is stable: equal counts stay in first-encounter order.
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Predictor score series
// ---------------------------------------------------------------------------

/// One point of a predictor score track: 1-based sequence position and the
/// predictor's score there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictorPoint {
    pub position: usize,
    pub score: f64,
}

/// Extract the position-indexed score series of one predictor.
///
/// The series length is whatever the stored track holds; a mismatch against
/// the sequence length is passed through untouched, it is a known
/// data-quality wrinkle of the source database. Fails with
/// [`DatasetError::MissingPredictorData`] when the record carries no track
/// for the predictor.
pub fn predictor_series(
    record: &ProteinRecord,
    predictor: Predictor,
) -> Result<Vec<PredictorPoint>, DatasetError> {
    let track = record
        .predictors
        .get(&predictor)
        .ok_or_else(|| DatasetError::MissingPredictorData {
            protein: record.tair_protein.clone(),
            predictor,
        })?;

    Ok(track
        .scores
        .iter()
        .enumerate()
        .map(|(i, &score)| PredictorPoint {
            position: i + 1,
            score,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Classification, Domains, Parameters, PredictorTrack};
    use std::collections::BTreeMap;

    fn record_with_vsl2(scores: Vec<f64>) -> ProteinRecord {
        let mut predictors = BTreeMap::new();
        predictors.insert(Predictor::Vsl2, PredictorTrack { scores });
        ProteinRecord {
            uniprot: "Q96261".to_string(),
            tair_protein: "AT1G01470.1".to_string(),
            tair_gene: "AT1G01470".to_string(),
            classification: Classification {
                class_pfam: "LEA_3".to_string(),
                class_acovs: "Group-1".to_string(),
            },
            domains: Domains {
                pfam: "PF03242".to_string(),
            },
            parameters: Parameters { gravy: -0.42 },
            sequence: "MAS".to_string(),
            predictors,
        }
    }

    #[test]
    fn counts_come_out_count_descending() {
        let rows = count_residues("AAAB").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].residue, rows[0].count), ('A', 3));
        assert_eq!((rows[1].residue, rows[1].count), ('B', 1));
        assert!((rows[0].percentage - 75.0).abs() < 1e-9);
        assert!((rows[1].percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn ties_keep_first_encounter_order() {
        let rows = count_residues("BABA").unwrap();
        let order: Vec<char> = rows.iter().map(|r| r.residue).collect();
        assert_eq!(order, ['B', 'A']);
    }

    #[test]
    fn counts_are_case_sensitive() {
        let rows = count_residues("aA").unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn counts_and_percentages_cover_the_whole_sequence() {
        let seq = "MASNQKFGEDLLSKMASM";
        let rows = count_residues(seq).unwrap();
        let total: usize = rows.iter().map(|r| r.count).sum();
        assert_eq!(total, seq.len());
        let pct: f64 = rows.iter().map(|r| r.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-6);
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let err = count_residues("").unwrap_err();
        assert!(matches!(err, DatasetError::EmptySequence));
    }

    #[test]
    fn series_positions_are_one_based() {
        let record = record_with_vsl2(vec![0.1, 0.9, 0.2]);
        let series = predictor_series(&record, Predictor::Vsl2).unwrap();
        assert_eq!(
            series,
            [
                PredictorPoint { position: 1, score: 0.1 },
                PredictorPoint { position: 2, score: 0.9 },
                PredictorPoint { position: 3, score: 0.2 },
            ]
        );
    }

    #[test]
    fn series_length_follows_the_track_not_the_sequence() {
        // Sequence has 3 residues, the track 5 scores; passed through as-is.
        let record = record_with_vsl2(vec![0.1; 5]);
        let series = predictor_series(&record, Predictor::Vsl2).unwrap();
        assert_eq!(series.len(), 5);
    }

    #[test]
    fn absent_track_is_reported() {
        let record = record_with_vsl2(vec![0.1]);
        let err = predictor_series(&record, Predictor::Mobidb).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingPredictorData {
                predictor: Predictor::Mobidb,
                ..
            }
        ));
    }
}
