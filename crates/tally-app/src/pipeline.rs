use std::path::Path;

use anyhow::Context;
use tally_config::Config;
use tally_core::{FrequencyTable, LanguageProcessor, normalize_corpus};
use tally_types::{NormalizedRecord, WordCount};

use crate::chart::render_bar_chart;
use crate::cli::Command;

/// Load the raw corpus, normalize every record and persist the snapshot
pub fn generate(
    config: &Config,
    processor: &dyn LanguageProcessor,
) -> anyhow::Result<Vec<NormalizedRecord>> {
    let input = Path::new(&config.corpus.input_path);
    let output = Path::new(&config.corpus.output_path);

    let raw = tally_io::load_raw_corpus(input)
        .with_context(|| format!("Failed to load corpus {}", input.display()))?;

    let normalized = normalize_corpus(&raw, processor);

    tally_io::write_snapshot(output, &normalized)
        .with_context(|| format!("Failed to write normalized corpus {}", output.display()))?;

    Ok(normalized)
}

/// Count words in the persisted snapshot and keep the top entries
pub fn rank(config: &Config) -> anyhow::Result<Vec<WordCount>> {
    let snapshot = Path::new(&config.corpus.output_path);

    let entries = tally_io::read_snapshot(snapshot)
        .with_context(|| format!("Failed to read normalized corpus {}", snapshot.display()))?;

    let table = FrequencyTable::from_texts(
        entries
            .iter()
            .map(|(_, text)| text.as_str())
            .filter(|text| !text.is_empty()),
    );
    tracing::info!(
        distinct = table.len(),
        total = table.total(),
        "Counted significant words"
    );

    Ok(table.most_common(config.report.top_k))
}

pub fn render(config: &Config, counts: &[WordCount]) -> String {
    render_bar_chart(&config.report.title, counts, config.report.chart_width)
}

/// Run one subcommand; returns the chart when the command draws one
pub fn execute(
    command: Command,
    config: &Config,
    processor: &dyn LanguageProcessor,
) -> anyhow::Result<Option<String>> {
    match command {
        Command::Generate => {
            generate(config, processor)?;
            Ok(None)
        }
        Command::Rank => {
            let counts = rank(config)?;
            Ok(Some(render(config, &counts)))
        }
        Command::Run => {
            generate(config, processor)?;
            let counts = rank(config)?;
            Ok(Some(render(config, &counts)))
        }
    }
}
