use serde::{Deserialize, Serialize};

fn default_top_k() -> usize {
    20
}

fn default_chart_width() -> usize {
    50
}

fn default_title() -> String {
    "Word frequency in XKCD comics".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// How many of the most frequent words to show
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Width in cells of the longest bar
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            chart_width: default_chart_width(),
            title: default_title(),
        }
    }
}
