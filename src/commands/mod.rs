//! CLI command implementations for foldertree operations.
//!
//! Available commands:
//! - **parse**: Parse tree text and print it as JSON or a normalized tree
//! - **id**: Look up a folder id by name
//! - **depth**: List folders at a given depth
//! - **published**: List published data collection versions
//! - **init**: Initialize a new foldertree configuration file
//!
//! Every command that reads a tree takes a [`TreeSource`] built in `main`
//! from CLI flags layered over `.foldertree.toml`.

pub mod init;
pub mod parse;
pub mod query;

pub use init::init_config;
pub use parse::{handle_parse, ParseConfig};
pub use query::{
    handle_depth, handle_id, handle_published, DepthConfig, IdConfig, PublishedVersionsConfig,
};

use std::path::PathBuf;

use crate::core::{FolderNode, Result};
use crate::io::{load_tree, read_input, InputFormat};
use crate::parser::ParserOptions;

/// Input location plus the settings needed to turn it into a tree
#[derive(Debug, Clone)]
pub struct TreeSource {
    pub input: Option<PathBuf>,
    pub input_format: InputFormat,
    pub parser: ParserOptions,
}

impl TreeSource {
    pub fn load(&self) -> Result<Vec<FolderNode>> {
        let contents = read_input(self.input.as_deref())?;
        load_tree(&contents, self.input_format, self.parser)
    }
}
