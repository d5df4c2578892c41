pub mod processor;
pub mod stopwords;

pub use processor::{EnglishProcessor, normalize};
pub use stopwords::{STOP_WORDS, is_stopword, stopwords};
