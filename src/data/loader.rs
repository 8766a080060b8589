use std::path::Path;

use serde_json::Value as JsonValue;

use super::error::DatasetError;
use super::model::{ProteinDataset, ProteinRecord};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the protein database from a JSON file.
///
/// Expected document shape: a top-level object mapping record keys to
/// protein records,
///
/// ```json
/// {
///   "AT1G01470.1": {
///     "uniprot": "Q96261",
///     "tair_protein": "AT1G01470.1",
///     "tair_gen": "AT1G01470",
///     "classification": { "ClassPFMA": "LEA_3", "ClassAcovs": "Group-2" },
///     "domains": { "PFAM": "PF03242" },
///     "parameters": { "GRAVY": -1.02 },
///     "sequence": "MQSAKEK...",
///     "predictors": { "VSL2": { "scores": [0.61, 0.70, ...] }, ... }
///   },
///   ...
/// }
/// ```
///
/// The file is read once; on any failure no dataset is produced at all.
pub fn load_file(path: &Path) -> Result<ProteinDataset, DatasetError> {
    let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(&text)
}

/// Parse the protein database from a JSON string.
///
/// Each record is validated against the full schema here, at load time, so a
/// missing field fails immediately as [`DatasetError::MalformedRecord`]
/// naming the record instead of surfacing later as a missing key somewhere in
/// the UI. Record order in the flattened table follows the insertion order of
/// the source document.
pub fn load_str(text: &str) -> Result<ProteinDataset, DatasetError> {
    let root: JsonValue = serde_json::from_str(text)
        .map_err(|e| DatasetError::DatasetFormat(e.to_string()))?;

    let entries = match root {
        JsonValue::Object(map) => map,
        other => {
            return Err(DatasetError::DatasetFormat(format!(
                "expected a top-level object, got {}",
                json_kind(&other)
            )));
        }
    };

    let mut ordered: Vec<(String, ProteinRecord)> = Vec::with_capacity(entries.len());

    for (key, value) in entries {
        if !value.is_object() {
            return Err(DatasetError::DatasetFormat(format!(
                "record '{key}' is {}, expected an object",
                json_kind(&value)
            )));
        }
        let record: ProteinRecord =
            serde_json::from_value(value).map_err(|e| DatasetError::MalformedRecord {
                record: key.clone(),
                detail: e.to_string(),
            })?;
        ordered.push((key, record));
    }

    Ok(ProteinDataset::from_records(ordered))
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Predictor;

    fn record_json(tair: &str, class_acovs: &str, sequence: &str) -> String {
        format!(
            r#"{{
                "uniprot": "Q{len:05}",
                "tair_protein": "{tair}.1",
                "tair_gen": "{tair}",
                "classification": {{ "ClassPFMA": "LEA_2", "ClassAcovs": "{class_acovs}" }},
                "domains": {{ "PFAM": "PF03168" }},
                "parameters": {{ "GRAVY": -0.8 }},
                "sequence": "{sequence}",
                "predictors": {{
                    "VSL2": {{ "scores": [0.1, 0.9, 0.2] }},
                    "IUPRED": {{ "scores": [0.5, 0.5, 0.5] }},
                    "ANCHOR": {{ "scores": [0.3, 0.2, 0.1] }},
                    "MOBIDB": {{ "scores": [1.0, 0.0, 1.0] }},
                    "FUZZPRED": {{ "scores": [0.4, 0.6, 0.8] }}
                }}
            }}"#,
            len = sequence.len(),
        )
    }

    fn three_record_db() -> String {
        format!(
            r#"{{ "AT2G36640.1": {a}, "AT1G01470.1": {b}, "AT3G15670.1": {c} }}"#,
            a = record_json("AT2G36640", "Group-1", "MASNQK"),
            b = record_json("AT1G01470", "Group-2", "MQS"),
            c = record_json("AT3G15670", "Group-1", "MADSTKQE"),
        )
    }

    #[test]
    fn load_produces_one_row_per_record_in_source_order() {
        let ds = load_str(&three_record_db()).unwrap();
        assert_eq!(ds.table.len(), ds.records.len());
        let keys: Vec<&str> = ds.table.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["AT2G36640.1", "AT1G01470.1", "AT3G15670.1"]);
    }

    #[test]
    fn length_column_matches_stored_sequence() {
        let ds = load_str(&three_record_db()).unwrap();
        for row in &ds.table {
            // Round-trip: the Length column must agree with re-deriving it
            // from the retained record.
            let stored = &ds.records[&row.key].sequence;
            assert_eq!(row.length, stored.chars().count());
        }
        assert_eq!(ds.table[1].length, 3);
    }

    #[test]
    fn class_index_collects_distinct_acovs_labels() {
        let ds = load_str(&three_record_db()).unwrap();
        assert_eq!(
            ds.class_values.iter().collect::<Vec<_>>(),
            ["Group-1", "Group-2"]
        );
    }

    #[test]
    fn predictor_tracks_are_keyed_by_the_closed_enum() {
        let ds = load_str(&three_record_db()).unwrap();
        let rec = ds.record("AT1G01470.1").unwrap();
        assert_eq!(rec.predictors.len(), 5);
        assert_eq!(rec.predictors[&Predictor::Vsl2].scores, [0.1, 0.9, 0.2]);
    }

    #[test]
    fn top_level_array_is_a_format_error() {
        let err = load_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, DatasetError::DatasetFormat(msg) if msg.contains("an array")));
    }

    #[test]
    fn unparsable_text_is_a_format_error() {
        let err = load_str("not json at all").unwrap_err();
        assert!(matches!(err, DatasetError::DatasetFormat(_)));
    }

    #[test]
    fn non_object_record_is_a_format_error() {
        let err = load_str(r#"{ "AT1G01470.1": 42 }"#).unwrap_err();
        assert!(matches!(err, DatasetError::DatasetFormat(msg) if msg.contains("AT1G01470.1")));
    }

    #[test]
    fn missing_field_names_record_and_field() {
        let mut record = record_json("AT1G01470", "Group-2", "MQS");
        record = record.replace(r#""sequence": "MQS","#, "");
        let doc = format!(r#"{{ "AT1G01470.1": {record} }}"#);
        let err = load_str(&doc).unwrap_err();
        match err {
            DatasetError::MalformedRecord { record, detail } => {
                assert_eq!(record, "AT1G01470.1");
                assert!(detail.contains("sequence"), "detail was: {detail}");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn unknown_predictor_key_is_a_malformed_record() {
        let record = record_json("AT1G01470", "Group-2", "MQS").replace(
            r#""VSL2":"#,
            r#""ESPRITZ": { "scores": [0.0] }, "VSL2":"#,
        );
        let doc = format!(r#"{{ "AT1G01470.1": {record} }}"#);
        let err = load_str(&doc).unwrap_err();
        assert!(matches!(err, DatasetError::MalformedRecord { record, .. } if record == "AT1G01470.1"));
    }
}
