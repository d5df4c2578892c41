use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Common English stopwords (NLTK list) plus filler words that dominate comic
/// transcripts without saying anything about their subject.
pub const STOP_WORDS: &[&str] = &[
    "ourselves", "d", "yourself", "but", "second", "go", "around", "hey", "girl",
    "someone", "again", "one", "two", "man", "woman", "get", "back", "figure", "there",
    "about", "once", "during", "out", "very", "having", "with", "they", "own", "an", "be",
    "some", "for", "do", "its", "yours", "such", "into", "of", "most", "itself", "other",
    "off", "is", "s", "am", "or", "who", "as", "from", "him", "each", "the", "themselves",
    "until", "below", "are", "we", "these", "your", "his", "through", "don", "nor", "me",
    "were", "her", "more", "himself", "this", "down", "should", "our", "their", "while",
    "above", "both", "up", "to", "ours", "had", "she", "all", "no", "when", "at", "any",
    "before", "them", "same", "and", "been", "have", "in", "will", "on", "does",
    "yourselves", "then", "that", "because", "what", "over", "why", "so", "can", "did",
    "not", "now", "under", "he", "you", "herself", "has", "just", "where", "too", "only",
    "myself", "which", "those", "i", "after", "few", "whom", "t", "being", "if", "theirs",
    "my", "against", "a", "by", "doing", "it", "how", "further", "was", "here", "than",
    "ll", "ve", "re", "m", "next", "guy", "person", "like", "first", "us", "another",
    "character", "still",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Process-wide stopword set, built on first use
pub fn stopwords() -> &'static HashSet<&'static str> {
    &STOPWORD_SET
}

/// Exact, case-sensitive membership test against lowercased words
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}
