use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::error::DatasetError;

// ---------------------------------------------------------------------------
// Predictor – the five disorder predictors present in the database
// ---------------------------------------------------------------------------

/// One of the disorder/flexibility predictors with a score track per protein.
///
/// The database only ever contains these five; anything else is rejected at
/// the string boundary by [`Predictor::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Predictor {
    Vsl2,
    Iupred,
    Anchor,
    Mobidb,
    Fuzzpred,
}

impl Predictor {
    /// All predictors, in the order the selector lists them.
    pub const ALL: [Predictor; 5] = [
        Predictor::Fuzzpred,
        Predictor::Vsl2,
        Predictor::Anchor,
        Predictor::Iupred,
        Predictor::Mobidb,
    ];

    /// The name used in the JSON document and the UI.
    pub fn name(self) -> &'static str {
        match self {
            Predictor::Vsl2 => "VSL2",
            Predictor::Iupred => "IUPRED",
            Predictor::Anchor => "ANCHOR",
            Predictor::Mobidb => "MOBIDB",
            Predictor::Fuzzpred => "FUZZPRED",
        }
    }
}

impl fmt::Display for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Predictor {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VSL2" => Ok(Predictor::Vsl2),
            "IUPRED" => Ok(Predictor::Iupred),
            "ANCHOR" => Ok(Predictor::Anchor),
            "MOBIDB" => Ok(Predictor::Mobidb),
            "FUZZPRED" => Ok(Predictor::Fuzzpred),
            other => Err(DatasetError::UnknownPredictor(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ProteinRecord – one entry of the source document
// ---------------------------------------------------------------------------

/// Classification labels from the two independent schemes.
#[derive(Debug, Clone, Deserialize)]
pub struct Classification {
    /// Spelled `ClassPFMA` in the source database.
    #[serde(rename = "ClassPFMA")]
    pub class_pfam: String,
    #[serde(rename = "ClassAcovs")]
    pub class_acovs: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Domains {
    #[serde(rename = "PFAM")]
    pub pfam: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Parameters {
    #[serde(rename = "GRAVY")]
    pub gravy: f64,
}

/// Per-predictor score track, one value per sequence position.
///
/// `scores.len()` should equal the sequence length; the database does not
/// guarantee it and no component checks it.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictorTrack {
    pub scores: Vec<f64>,
}

/// A single LEA protein as stored in the source document.
#[derive(Debug, Clone, Deserialize)]
pub struct ProteinRecord {
    pub uniprot: String,
    pub tair_protein: String,
    #[serde(rename = "tair_gen")]
    pub tair_gene: String,
    pub classification: Classification,
    pub domains: Domains,
    pub parameters: Parameters,
    pub sequence: String,
    pub predictors: BTreeMap<Predictor, PredictorTrack>,
}

// ---------------------------------------------------------------------------
// ProteinRow – one flattened table row
// ---------------------------------------------------------------------------

/// Row-per-record projection of the fields shown in the table, plus the
/// derived sequence length.
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinRow {
    /// Key of the record in the source mapping; the selection handle.
    pub key: String,
    pub uniprot: String,
    pub tair_protein: String,
    pub tair_gene: String,
    pub class_pfam: String,
    pub class_acovs: String,
    pub pfam: String,
    pub gravy: f64,
    pub length: usize,
}

impl ProteinRow {
    /// Flatten one record under its source key.
    pub fn from_record(key: &str, record: &ProteinRecord) -> Self {
        ProteinRow {
            key: key.to_string(),
            uniprot: record.uniprot.clone(),
            tair_protein: record.tair_protein.clone(),
            tair_gene: record.tair_gene.clone(),
            class_pfam: record.classification.class_pfam.clone(),
            class_acovs: record.classification.class_acovs.clone(),
            pfam: record.domains.pfam.clone(),
            gravy: record.parameters.gravy,
            length: record.sequence.chars().count(),
        }
    }
}

/// Display names of the table columns, in order.
pub const TABLE_COLUMNS: [&str; 8] = [
    "UNIPROT",
    "TAIR-Protein",
    "TAIR-Gen",
    "Class-PFAM",
    "Class-Acovs",
    "PFAM",
    "GRAVY",
    "Length",
];

// ---------------------------------------------------------------------------
// ProteinDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The parsed database: original records for per-protein lookup, the
/// flattened table in source order, and the distinct Acovs class labels.
#[derive(Debug, Clone)]
pub struct ProteinDataset {
    /// The source mapping, retained verbatim for per-protein lookup.
    pub records: BTreeMap<String, ProteinRecord>,
    /// One row per record, in the insertion order of the source document.
    pub table: Vec<ProteinRow>,
    /// Distinct `ClassAcovs` values, for the filter widgets.
    pub class_values: BTreeSet<String>,
}

impl ProteinDataset {
    /// Build the table and class index from records in their source order.
    pub fn from_records(ordered: Vec<(String, ProteinRecord)>) -> Self {
        let table: Vec<ProteinRow> = ordered
            .iter()
            .map(|(key, rec)| ProteinRow::from_record(key, rec))
            .collect();
        let class_values: BTreeSet<String> =
            table.iter().map(|row| row.class_acovs.clone()).collect();
        let records: BTreeMap<String, ProteinRecord> = ordered.into_iter().collect();
        ProteinDataset {
            records,
            table,
            class_values,
        }
    }

    /// Look up a single protein by its record key.
    pub fn record(&self, key: &str) -> Result<&ProteinRecord, DatasetError> {
        self.records
            .get(key)
            .ok_or_else(|| DatasetError::UnknownProtein(key.to_string()))
    }

    /// Number of proteins.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
