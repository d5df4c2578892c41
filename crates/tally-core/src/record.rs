use tally_types::{NormalizedRecord, RawRecord, TextSource};

use crate::language::LanguageProcessor;

/// Normalize one record, preferring its transcript.
///
/// The alt text is consulted only when the transcript normalizes to nothing.
pub fn normalize_record(raw: &RawRecord, processor: &dyn LanguageProcessor) -> NormalizedRecord {
    let primary = processor.normalize(&raw.transcript);

    let (text, source) = if primary.is_empty() {
        (processor.normalize(&raw.alt), TextSource::Fallback)
    } else {
        (primary, TextSource::Primary)
    };

    NormalizedRecord {
        id: raw.id.clone(),
        text,
        source,
    }
}

/// Normalize every record, keeping input order
pub fn normalize_corpus(
    records: &[RawRecord],
    processor: &dyn LanguageProcessor,
) -> Vec<NormalizedRecord> {
    let mut normalized = Vec::with_capacity(records.len());
    let mut fallbacks = 0usize;

    for raw in records {
        let record = normalize_record(raw, processor);
        if record.source == TextSource::Fallback {
            fallbacks += 1;
        }
        tracing::debug!(id = %record.id, source = ?record.source, "Processed record");
        normalized.push(record);
    }

    tracing::info!(
        language = processor.language_code(),
        records = normalized.len(),
        fallbacks,
        "Normalized corpus"
    );

    normalized
}
