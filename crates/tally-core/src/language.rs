/// Text processing interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code)
    fn language_code(&self) -> &str;

    /// Whether a lowercased word carries no signal for frequency analysis
    fn is_stopword(&self, word: &str) -> bool;

    /// Break text into significant tokens, stopwords already removed
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Significant tokens joined with single spaces; never fails
    fn normalize(&self, text: &str) -> String {
        let words: Vec<String> = self
            .tokenize(text)
            .into_iter()
            .map(|token| token.surface)
            .collect();
        words.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    /// Index among all whitespace-separated words, before stopword filtering
    pub position: usize,
}
