use tally_core::language::{LanguageProcessor, Token};
use tally_core::preprocess::Preprocessor;

use crate::stopwords;

/// English text normalizer for comic transcripts.
///
/// Lowercases (ASCII only), drops `[[...]]` and `{{...}}` spans, blanks every
/// character outside `a-z`, then removes stopwords. Letters outside ASCII are
/// discarded rather than folded.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishProcessor;

impl EnglishProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Preprocessor for EnglishProcessor {}

impl LanguageProcessor for EnglishProcessor {
    fn language_code(&self) -> &str {
        "en"
    }

    fn is_stopword(&self, word: &str) -> bool {
        stopwords::is_stopword(word)
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        self.process(text)
            .split_whitespace()
            .enumerate()
            .filter(|(_, word)| !self.is_stopword(word))
            .map(|(position, word)| Token {
                surface: word.to_string(),
                position,
            })
            .collect()
    }
}

/// Normalize `text` with the English processor
pub fn normalize(text: &str) -> String {
    EnglishProcessor.normalize(text)
}
