use std::path::PathBuf;

use thiserror::Error;

use super::model::Predictor;

// ---------------------------------------------------------------------------
// DatasetError – everything the data layer can fail with
// ---------------------------------------------------------------------------

/// Errors raised by the data layer. All are raised at the point of detection
/// and propagated to the UI unmodified; there are no retries and no silent
/// recovery anywhere below the UI.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read at all.
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON, or its top level is not an object of
    /// record objects.
    #[error("dataset is not an object of protein records: {0}")]
    DatasetFormat(String),

    /// A record is missing a required field or holds the wrong type for one.
    /// `detail` is the serde message, which names the offending field.
    #[error("record '{record}': {detail}")]
    MalformedRecord { record: String, detail: String },

    /// Residue counting needs at least one residue (the percentage column
    /// divides by the sequence length).
    #[error("cannot count residues of an empty sequence")]
    EmptySequence,

    /// A predictor name outside the five the database knows about.
    #[error("unknown predictor '{0}' (expected VSL2, IUPRED, ANCHOR, MOBIDB or FUZZPRED)")]
    UnknownPredictor(String),

    /// The record carries no score track for the requested predictor.
    #[error("protein '{protein}' has no {predictor} scores")]
    MissingPredictorData { protein: String, predictor: Predictor },

    /// A protein key that is not present in the loaded records.
    #[error("unknown protein '{0}'")]
    UnknownProtein(String),
}
