//! Folder tree data model and error types

pub mod errors;
pub mod node;

pub use errors::{Error, ParseError, ParseErrorKind, Result, ResultExt};
pub use node::{check_depths, walk, FolderNode, PropertyEntry, Walk};
