use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde_json::{Map, Value};
use tally_core::CorpusError;
use tally_types::NormalizedRecord;
use tempfile::NamedTempFile;

/// Write `{ id: text }` as a complete snapshot.
///
/// The JSON goes to a temp file next to `path` which then replaces `path`, so
/// readers never observe a half-written corpus.
pub fn write_snapshot(path: &Path, records: &[NormalizedRecord]) -> Result<(), CorpusError> {
    let path_str = path.display().to_string();
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)
        .map_err(|e| CorpusError::from_io(parent_dir.display().to_string(), e))?;

    let mut snapshot = Map::new();
    for record in records {
        snapshot.insert(record.id.clone(), Value::String(record.text.clone()));
    }

    let temp_file =
        NamedTempFile::new_in(parent_dir).map_err(|e| CorpusError::from_io(&path_str, e))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, &Value::Object(snapshot)).map_err(|source| {
            CorpusError::Json {
                path: path_str.clone(),
                source,
            }
        })?;
        writer.flush().map_err(|e| CorpusError::from_io(&path_str, e))?;
    }

    temp_file
        .persist(path)
        .map_err(|e| CorpusError::Persist(format!("{path_str}: {}", e.error)))?;

    tracing::info!("Successfully wrote {} records to {path_str}", records.len());
    Ok(())
}

/// Read a snapshot back as `(id, text)` pairs in file order
pub fn read_snapshot(path: &Path) -> Result<Vec<(String, String)>, CorpusError> {
    let path_str = path.display().to_string();
    tracing::info!("Reading normalized corpus from {path_str}");

    let file = File::open(path).map_err(|e| CorpusError::from_io(&path_str, e))?;
    let reader = BufReader::new(file);
    let root: Value = serde_json::from_reader(reader).map_err(|source| CorpusError::Json {
        path: path_str.clone(),
        source,
    })?;

    let Value::Object(entries) = root else {
        return Err(CorpusError::InvalidFormat(format!(
            "{path_str} must be a JSON object of id to text"
        )));
    };

    entries
        .into_iter()
        .map(|(id, value)| match value {
            Value::String(text) => Ok((id, text)),
            _ => Err(CorpusError::InvalidFormat(format!(
                "{path_str}: entry {id} is not a string"
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tally_types::TextSource;

    use super::*;

    fn record(id: &str, text: &str) -> NormalizedRecord {
        NormalizedRecord {
            id: id.to_string(),
            text: text.to_string(),
            source: TextSource::Primary,
        }
    }

    #[test]
    fn writes_pretty_json_in_record_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.json");

        write_snapshot(&path, &[record("2", "robot"), record("1", "")]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"2\": \"robot\",\n  \"1\": \"\"\n}");
    }

    #[test]
    fn read_back_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.json");
        let records = vec![record("10", "kite kite"), record("9", "dinosaur"), record("11", "")];

        write_snapshot(&path, &records).unwrap();
        let pairs = read_snapshot(&path).unwrap();

        assert_eq!(
            pairs,
            vec![
                ("10".to_string(), "kite kite".to_string()),
                ("9".to_string(), "dinosaur".to_string()),
                ("11".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn replaces_existing_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.json");

        write_snapshot(&path, &[record("1", "old"), record("2", "stale")]).unwrap();
        write_snapshot(&path, &[record("3", "new")]).unwrap();

        assert_eq!(read_snapshot(&path).unwrap(), vec![("3".to_string(), "new".to_string())]);
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("nested").join("generated.json");

        write_snapshot(&path, &[record("1", "x")]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn non_string_entries_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.json");
        fs::write(&path, r#"{ "1": 5 }"#).unwrap();

        let err = read_snapshot(&path).unwrap_err();
        assert!(matches!(err, CorpusError::InvalidFormat(_)));
    }

    #[test]
    fn missing_snapshot_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_snapshot(&dir.path().join("generated.json")).unwrap_err();
        assert!(matches!(err, CorpusError::FileNotFound(_)));
    }
}
