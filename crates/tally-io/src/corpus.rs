use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::{Map, Value};
use tally_core::CorpusError;
use tally_types::RawRecord;

pub const PRIMARY_FIELD: &str = "transcript";
pub const FALLBACK_FIELD: &str = "alt";

/// Load the raw corpus, keeping the file's record order
pub fn load_raw_corpus(path: &Path) -> Result<Vec<RawRecord>, CorpusError> {
    let path_str = path.display().to_string();
    tracing::info!("Loading corpus from {path_str}");

    let file = File::open(path).map_err(|e| CorpusError::from_io(&path_str, e))?;
    let reader = BufReader::new(file);
    let root: Value = serde_json::from_reader(reader).map_err(|source| CorpusError::Json {
        path: path_str.clone(),
        source,
    })?;

    let records = records_from_value(root)?;
    tracing::info!("Loaded {} records from {path_str}", records.len());
    Ok(records)
}

/// Parse a raw corpus held in memory
pub fn parse_raw_corpus(json: &str) -> Result<Vec<RawRecord>, CorpusError> {
    let root: Value = serde_json::from_str(json).map_err(|source| CorpusError::Json {
        path: "<memory>".to_string(),
        source,
    })?;
    records_from_value(root)
}

fn records_from_value(root: Value) -> Result<Vec<RawRecord>, CorpusError> {
    let Value::Object(entries) = root else {
        return Err(CorpusError::InvalidFormat(
            "corpus must be a JSON object keyed by record id".to_string(),
        ));
    };

    entries
        .into_iter()
        .map(|(id, value)| record_from_value(id, &value))
        .collect()
}

fn record_from_value(id: String, value: &Value) -> Result<RawRecord, CorpusError> {
    let Some(fields) = value.as_object() else {
        return Err(CorpusError::InvalidFormat(format!(
            "record {id} is not a JSON object"
        )));
    };

    let transcript = text_field(fields, &id, PRIMARY_FIELD)?;
    let alt = text_field(fields, &id, FALLBACK_FIELD)?;

    Ok(RawRecord { id, transcript, alt })
}

fn text_field(fields: &Map<String, Value>, id: &str, field: &'static str) -> Result<String, CorpusError> {
    fields
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| CorpusError::MissingField {
            id: id.to_string(),
            field,
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_records_in_file_order() {
        let json = r#"{
            "614": { "transcript": "[[A man]] Woodpecker!", "alt": "If you don't have an extension cord", "num": 614 },
            "1": { "transcript": "", "alt": "Don't we all.", "title": "Barrel - Part 1" },
            "353": { "transcript": "Python", "alt": "I wrote 20 short programs" }
        }"#;

        let records = parse_raw_corpus(json).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["614", "1", "353"]);
        assert_eq!(records[0].transcript, "[[A man]] Woodpecker!");
        assert_eq!(records[1].alt, "Don't we all.");
    }

    #[test]
    fn missing_fallback_field_is_reported() {
        let err = parse_raw_corpus(r#"{ "7": { "transcript": "hi" } }"#).unwrap_err();
        assert!(matches!(
            err,
            CorpusError::MissingField { ref id, field: "alt" } if id == "7"
        ));
    }

    #[test]
    fn non_string_field_counts_as_missing() {
        let err = parse_raw_corpus(r#"{ "8": { "transcript": null, "alt": "x" } }"#).unwrap_err();
        assert!(matches!(err, CorpusError::MissingField { field: "transcript", .. }));
    }

    #[test]
    fn root_must_be_object() {
        let err = parse_raw_corpus(r#"[{ "transcript": "", "alt": "" }]"#).unwrap_err();
        assert!(matches!(err, CorpusError::InvalidFormat(_)));
    }

    #[test]
    fn record_must_be_object() {
        let err = parse_raw_corpus(r#"{ "9": "just text" }"#).unwrap_err();
        assert!(matches!(err, CorpusError::InvalidFormat(ref msg) if msg.contains('9')));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = parse_raw_corpus("{ nope").unwrap_err();
        assert!(matches!(err, CorpusError::Json { .. }));
    }

    #[test]
    fn empty_corpus_is_fine() {
        assert!(parse_raw_corpus("{}").unwrap().is_empty());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "1": {{ "transcript": "a", "alt": "b" }} }}"#).unwrap();

        let records = load_raw_corpus(file.path()).unwrap();
        assert_eq!(records, vec![RawRecord::new("1", "a", "b")]);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_raw_corpus(&dir.path().join("xkcd_comics.json")).unwrap_err();
        assert!(matches!(err, CorpusError::FileNotFound(_)));
    }
}
