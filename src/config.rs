//! Parser configuration.
//!
//! A [`Config`] mirrors the JSON shape users write:
//!
//! ```json
//! {
//!   "debug": true,
//!   "emoticon_html": "<span class=\"emo emoticon-{EMOTICON}\" title=\"{EMOTICON}\"></span>",
//!   "emoticons": { "zzz": { "emos": [":~"] } }
//! }
//! ```
//!
//! Every field is optional. Missing pieces fall back to the built-in values
//! when the parser is constructed; loading is the only step that can fail.

use crate::dictionary::Dictionary;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Placeholder substituted with the emoticon identifier in the HTML template.
pub const PLACEHOLDER: &str = "{EMOTICON}";

/// Template used when none (or an empty one) is configured.
pub const DEFAULT_EMOTICON_HTML: &str = r#"<span class="emoticon-{EMOTICON}" title="{EMOTICON}"></span>"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid emoticon config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log the built trie as a tree diagram after construction.
    pub debug: bool,
    /// Markup template containing [`PLACEHOLDER`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoticon_html: Option<String>,
    /// User entries merged over the built-in dictionary.
    pub emoticons: Dictionary,
}

impl Config {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&s)
    }

    /// The template in effect: the configured one unless it is missing or empty.
    pub fn template(&self) -> &str {
        match self.emoticon_html.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => DEFAULT_EMOTICON_HTML,
        }
    }
}
