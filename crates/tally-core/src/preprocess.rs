use once_cell::sync::Lazy;
use regex::Regex;

use crate::markup::strip_markup;

/// Anything that is not a lowercase ASCII letter, a space, or a newline
static NON_WORD_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z \n]").expect("character class is a valid regex"));

pub trait Preprocessor {
    // Default preprocessor: lowercase, drop markup spans, blank out everything else
    fn process(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let lowered = text.to_ascii_lowercase();
        let unmarked = strip_markup(&lowered);

        NON_WORD_CHARS.replace_all(&unmarked, " ").into_owned()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
