use serde::{Deserialize, Serialize};

use crate::error::SearchError;

pub const DEFAULT_DEPTH: u32 = 2;
pub const DEFAULT_BREADTH: u32 = 10;

/// Default budget used by [`Searcher::suggest_default`](crate::engine::Searcher::suggest_default).
/// Individual calls may override both values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    #[serde(default = "default_depth")]
    pub depth: u32,
    #[serde(default = "default_breadth")]
    pub breadth: u32,
}

fn default_depth() -> u32 {
    DEFAULT_DEPTH
}

fn default_breadth() -> u32 {
    DEFAULT_BREADTH
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            breadth: DEFAULT_BREADTH,
        }
    }
}

impl SearchConfig {
    pub fn from_json(text: &str) -> Result<Self, SearchError> {
        Ok(serde_json::from_str(text)?)
    }
}
