// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/autocomplete";
pub const DEFAULT_PARAM: &str = "title";
pub const DEFAULT_MIN_CHARS: usize = 2;
pub const DEFAULT_LINK_PREFIX: &str = "books/";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_param() -> String {
    DEFAULT_PARAM.to_string()
}

fn default_min_chars() -> usize {
    DEFAULT_MIN_CHARS
}

fn default_link_prefix() -> String {
    DEFAULT_LINK_PREFIX.to_string()
}

/// Suggestion endpoint configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestConfig {
    /// Absolute URL of the autocomplete endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Query parameter carrying the typed value
    #[serde(default = "default_param")]
    pub param: String,
    /// Inputs shorter than this never trigger a request
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
    /// Prepended to a suggestion id to build its link target
    #[serde(default = "default_link_prefix")]
    pub link_prefix: String,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            endpoint: default_endpoint(),
            param: default_param(),
            min_chars: default_min_chars(),
            link_prefix: default_link_prefix(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggest: SuggestConfig,
}
