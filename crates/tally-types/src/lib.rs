pub mod types;

pub use types::{NormalizedRecord, RawRecord, TextSource, WordCount};
