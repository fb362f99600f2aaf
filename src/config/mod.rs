//! `.foldertree.toml` configuration

mod core;
mod loader;

pub use self::core::{
    default_indent_step, default_marker_key, FolderTreeConfig, OutputConfig, ParserConfig,
    PublishedConfig,
};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

use crate::parser::ParserOptions;

impl FolderTreeConfig {
    /// Parser options derived from the `[parser]` section
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            indent_step: self.indent_step(),
        }
    }
}

/// Default file written by `foldertree init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# foldertree configuration

[parser]
# Characters per nesting level in `wb folder tree` output
indent_step = 4

[published]
# Property key marking a published data collection version.
# Newer workbench releases use "wb-published-date".
marker_key = "terra-published-date"

[output]
# "terminal" or "json"
default_format = "terminal"
"#;
