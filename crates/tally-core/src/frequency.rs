use std::collections::HashMap;

use tally_types::WordCount;

/// Word occurrence counts that remember first-encounter order
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Create empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every whitespace-separated word across `texts`, in order
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for text in texts {
            table.add_text(text.as_ref());
        }
        table
    }

    pub fn add_text(&mut self, text: &str) {
        for word in text.split_whitespace() {
            self.add(word);
        }
    }

    pub fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&idx) => self.entries[idx].count += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push(WordCount::new(word, 1));
            }
        }
    }

    /// Occurrences of `word`, zero if never seen
    pub fn count(&self, word: &str) -> usize {
        self.index
            .get(word)
            .map(|&idx| self.entries[idx].count)
            .unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of words counted
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Top `k` words by descending count; equal counts keep first-encounter order
    pub fn most_common(&self, k: usize) -> Vec<WordCount> {
        let mut ranked = self.entries.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(k);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_across_texts() {
        let table = FrequencyTable::from_texts(["dog dog cat", "dog bird"]);
        assert_eq!(table.count("dog"), 3);
        assert_eq!(table.count("cat"), 1);
        assert_eq!(table.count("bird"), 1);
        assert_eq!(table.count("fish"), 0);
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn ties_keep_first_encounter_order() {
        let table = FrequencyTable::from_texts(["dog dog cat", "dog bird"]);
        assert_eq!(
            table.most_common(2),
            vec![WordCount::new("dog", 3), WordCount::new("cat", 1)]
        );

        let reversed = FrequencyTable::from_texts(["dog bird", "dog dog cat"]);
        assert_eq!(
            reversed.most_common(2),
            vec![WordCount::new("dog", 3), WordCount::new("bird", 1)]
        );
    }

    #[test]
    fn empty_texts_contribute_nothing() {
        let table = FrequencyTable::from_texts(["", "  ", "kite\nkite"]);
        assert_eq!(table.most_common(5), vec![WordCount::new("kite", 2)]);
    }

    #[test]
    fn k_bounds() {
        let table = FrequencyTable::from_texts(["a b c"]);
        assert!(table.most_common(0).is_empty());
        assert_eq!(table.most_common(10).len(), 3);
        assert!(FrequencyTable::new().most_common(3).is_empty());
        assert!(FrequencyTable::new().is_empty());
    }

    #[test]
    fn later_word_can_overtake_earlier() {
        let table = FrequencyTable::from_texts(["alpha beta beta gamma gamma gamma"]);
        let words: Vec<String> = table.most_common(3).into_iter().map(|w| w.word).collect();
        assert_eq!(words, ["gamma", "beta", "alpha"]);
    }
}
