use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tally_config::{Config, LogFormat};

#[derive(Debug, Parser)]
#[command(
    name = "tally",
    version,
    about = "Normalize a comic transcript corpus and chart its most frequent words"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON config file; env vars and flags override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Raw corpus to normalize
    #[arg(long, global = true)]
    pub input: Option<String>,

    /// Where the normalized corpus is written and read back from
    #[arg(long, global = true)]
    pub output: Option<String>,

    /// Number of words to chart
    #[arg(long, global = true)]
    pub top: Option<usize>,

    /// Width of the longest bar
    #[arg(long, global = true)]
    pub width: Option<usize>,

    /// pretty or json
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Normalize, persist, count and chart (default)
    #[default]
    Run,
    /// Normalize the raw corpus and persist it
    Generate,
    /// Count and chart an already persisted corpus
    Rank,
}

impl Cli {
    /// Flags win over everything loaded before them
    pub fn apply(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.corpus.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            config.corpus.output_path = output.clone();
        }
        if let Some(top) = self.top {
            config.report.top_k = top;
        }
        if let Some(width) = self.width {
            config.report.chart_width = width;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
    }
}
