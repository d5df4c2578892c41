use serde::{Deserialize, Serialize};

/// A corpus entry as it arrives from the input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub id: String,
    /// Primary text (the comic transcript)
    pub transcript: String,
    /// Fallback text (the alt/title text)
    pub alt: String,
}

impl RawRecord {
    pub fn new(id: impl Into<String>, transcript: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            transcript: transcript.into(),
            alt: alt.into(),
        }
    }
}

/// Which field of a [`RawRecord`] produced the stored text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSource {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub id: String,
    /// Space-joined significant words, possibly empty
    pub text: String,
    pub source: TextSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}
