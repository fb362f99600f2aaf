pub mod output;

pub use output::{create_writer, render_tree, JsonWriter, OutputFormat, TerminalWriter, TreeWriter};

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::core::{check_depths, Error, FolderNode, Result, ResultExt};
use crate::parser::{ParserOptions, TreeParser};

/// How to interpret tree input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// JSON if the input starts with `[`, tree text otherwise
    #[default]
    Auto,
    Text,
    Json,
}

/// Read a whole file, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .map_err(Error::from)
            .context(format!("Failed to read {}", path.display())),
        _ => {
            let mut contents = String::new();
            std::io::stdin().read_to_string(&mut contents)?;
            Ok(contents)
        }
    }
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

fn looks_like_json(contents: &str) -> bool {
    contents.trim_start().starts_with('[')
}

/// Turn raw input into a folder tree. JSON input must already satisfy the
/// depth invariant.
pub fn load_tree(
    contents: &str,
    format: InputFormat,
    options: ParserOptions,
) -> Result<Vec<FolderNode>> {
    let as_json = match format {
        InputFormat::Auto => looks_like_json(contents),
        InputFormat::Text => false,
        InputFormat::Json => true,
    };

    if as_json {
        let tree: Vec<FolderNode> = serde_json::from_str(contents)?;
        check_depths(&tree)?;
        tracing::debug!(top_level = tree.len(), "loaded folder tree from JSON");
        Ok(tree)
    } else {
        Ok(TreeParser::new(options).parse(contents)?)
    }
}
