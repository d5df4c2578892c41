use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::corpus::CorpusConfig;
use self::logging::LoggingConfig;
use self::report::ReportConfig;

pub mod corpus;
pub mod logging;
pub mod report;

pub use logging::LogFormat;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Read a JSON config file; keys it leaves out keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let path_str = path.display().to_string();
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path_str.clone(),
            source,
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| ConfigError::Parse {
            path: path_str,
            source,
        })
    }

    /// File (if any) layered under the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Override fields from `TALLY_*` variables; a value that doesn't parse is an error
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(|key| env::var(key).ok())
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(input) = var("TALLY_INPUT") {
            self.corpus.input_path = input;
        }

        if let Some(output) = var("TALLY_OUTPUT") {
            self.corpus.output_path = output;
        }

        if let Some(top_k) = parse_var(&var, "TALLY_TOP_K")? {
            self.report.top_k = top_k;
        }

        if let Some(width) = parse_var(&var, "TALLY_CHART_WIDTH")? {
            self.report.chart_width = width;
        }

        if let Some(format) = parse_var(&var, "TALLY_LOG_FORMAT")? {
            self.logging.format = format;
        }

        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(value) = var(key) else {
        return Ok(None);
    };
    value
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnv { key, value })
}
