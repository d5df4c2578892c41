use serde::{Deserialize, Serialize};

fn default_input_path() -> String {
    "xkcd_comics.json".to_string()
}

fn default_output_path() -> String {
    "generated.json".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CorpusConfig {
    /// Raw corpus: `{ id: { "transcript": .., "alt": .. } }`
    #[serde(default = "default_input_path")]
    pub input_path: String,
    /// Normalized snapshot: `{ id: text }`
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
        }
    }
}
