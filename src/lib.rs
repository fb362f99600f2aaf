//! Parse `wb folder tree` / `terra folder tree` box-drawing output into a
//! nested folder structure and query it.
//!
//! ```
//! use foldertree::{get_folder_id, get_folders_with_depth, parse_tree};
//!
//! let text = "├── Genomics (g1)\n│   └── Variant Files (v1)\n└── Clinical (c1)\n";
//! let tree = parse_tree(text).unwrap();
//!
//! assert_eq!(get_folder_id("Variant Files", &tree), Some("v1"));
//! assert_eq!(get_folders_with_depth(1, &tree), vec!["Genomics", "Clinical"]);
//! ```

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod observability;
pub mod parser;
pub mod query;

// Re-export commonly used types
pub use crate::core::{
    check_depths, walk, Error, FolderNode, ParseError, ParseErrorKind, PropertyEntry, Result,
};

pub use crate::parser::{parse_tree, ParserOptions, TreeParser};

pub use crate::query::{
    find_folder, get_folder_id, get_folders_with_depth, get_published_versions,
    get_published_versions_with_marker, increment_tree_depth, PUBLISHED_DATE_KEY,
};

pub use crate::io::{render_tree, OutputFormat};
