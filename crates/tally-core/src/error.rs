/// Failures of the corpus plumbing around the normalizer.
///
/// Every variant is fatal for the run; nothing retries or keeps partial output.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Record {id} is missing text field `{field}`")]
    MissingField { id: String, field: &'static str },

    #[error("Failed to persist snapshot: {0}")]
    Persist(String),
}

impl CorpusError {
    /// Map an IO error, turning `NotFound` into [`CorpusError::FileNotFound`]
    pub fn from_io(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            CorpusError::FileNotFound(path)
        } else {
            CorpusError::Io { path, source }
        }
    }
}
