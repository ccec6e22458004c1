// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_QUERY_PARAM: &str = "q";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_WIDE_MIN_WIDTH: u16 = 100;

/// Suggestion source section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    /// Suggestion endpoint; the query is appended as a URL parameter
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_query_param")]
    pub query_param: String,
    /// Request timeout; 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_query_param() -> String {
    DEFAULT_QUERY_PARAM.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            endpoint: None,
            query_param: default_query_param(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Panel layout selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Wide when the terminal is at least `wide_min_width` columns
    #[default]
    Auto,
    Compact,
    Wide,
}

/// Styling section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub layout: LayoutMode,
    #[serde(default = "default_wide_min_width")]
    pub wide_min_width: u16,
}

fn default_wide_min_width() -> u16 {
    DEFAULT_WIDE_MIN_WIDTH
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            layout: LayoutMode::Auto,
            wide_min_width: DEFAULT_WIDE_MIN_WIDTH,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub style: StyleConfig,
}
