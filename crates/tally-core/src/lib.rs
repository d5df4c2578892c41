pub mod error;
pub mod frequency;
pub mod language;
pub mod markup;
pub mod preprocess;
pub mod record;

pub use error::CorpusError;
pub use frequency::FrequencyTable;
pub use language::{LanguageProcessor, Token};
pub use preprocess::{DefaultPreprocessor, Preprocessor};
pub use record::{normalize_corpus, normalize_record};
