pub mod corpus;
pub mod snapshot;

pub use corpus::{load_raw_corpus, parse_raw_corpus};
pub use snapshot::{read_snapshot, write_snapshot};
