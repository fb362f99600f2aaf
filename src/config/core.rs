use serde::{Deserialize, Serialize};

use crate::parser::DEFAULT_INDENT_STEP;
use crate::query::PUBLISHED_DATE_KEY;

/// Root configuration structure for foldertree
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FolderTreeConfig {
    /// Tree-text parser settings
    #[serde(default)]
    pub parser: Option<ParserConfig>,

    /// Published version detection
    #[serde(default)]
    pub published: Option<PublishedConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParserConfig {
    /// Characters per nesting level
    #[serde(default = "default_indent_step")]
    pub indent_step: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            indent_step: default_indent_step(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublishedConfig {
    /// Property key marking a published version, e.g. `wb-published-date`
    #[serde(default = "default_marker_key")]
    pub marker_key: String,
}

impl Default for PublishedConfig {
    fn default() -> Self {
        Self {
            marker_key: default_marker_key(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<String>,
}

pub fn default_indent_step() -> usize {
    DEFAULT_INDENT_STEP
}

pub fn default_marker_key() -> String {
    PUBLISHED_DATE_KEY.to_string()
}

impl FolderTreeConfig {
    pub fn indent_step(&self) -> usize {
        self.parser
            .as_ref()
            .map_or_else(default_indent_step, |p| p.indent_step)
    }

    pub fn published_marker(&self) -> &str {
        self.published
            .as_ref()
            .map_or(PUBLISHED_DATE_KEY, |p| p.marker_key.as_str())
    }

    /// Configured default output format name, if any
    pub fn default_format(&self) -> Option<&str> {
        self.output.as_ref()?.default_format.as_deref()
    }

    /// Check values serde cannot express constraints for
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_step() == 0 {
            return Err("parser.indent_step must be at least 1".to_string());
        }
        if self.published_marker().trim().is_empty() {
            return Err("published.marker_key must not be empty".to_string());
        }
        if let Some(format) = self.default_format() {
            if !matches!(format, "terminal" | "json") {
                return Err(format!(
                    "output.default_format must be \"terminal\" or \"json\", got {:?}",
                    format
                ));
            }
        }
        Ok(())
    }
}
