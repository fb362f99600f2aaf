//! Classification of single lines of box-drawing tree text.
//!
//! A line looks like
//!
//! ```text
//! │   │   └── Aligned Files (f6cc00ad-9d66-4644-8543-7c3ced6bd63f)
//! ^^^^^^^^ prefix
//!         ^^^ connector
//! ```
//!
//! The prefix is made of `│` continuation markers and padding. Its width in
//! characters is the only thing that decides nesting.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{ParseError, ParseErrorKind};

// U+00A0 shows up in `tree`-style output as padding after `│`.
static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<prefix>[│ \x{A0}]*)(?P<connector>[├└])───*(?P<content>.*)$").unwrap()
});

// The id is the last parenthetical at the end of the line.
static ID_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<name>.*?)\s*\((?P<id>[^()]*)\)\s*$").unwrap());

/// Which connector glyph introduced the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// `├──`, more siblings follow
    Branch,
    /// `└──`, last sibling in its group
    Last,
}

/// A normalized line of tree text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    /// 1-based line number in the input
    pub line_number: usize,
    /// Characters before the connector
    pub prefix_width: usize,
    pub connector: Connector,
    pub name: String,
    pub id: Option<String>,
}

/// Classify one raw line. Blank lines yield `Ok(None)`.
pub fn parse_line(line_number: usize, raw: &str) -> Result<Option<TreeLine>, ParseError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let captures = LINE_PATTERN.captures(raw).ok_or_else(|| {
        ParseError::new(
            line_number,
            ParseErrorKind::UnrecognizedLine {
                content: raw.trim_end().to_string(),
            },
        )
    })?;

    let prefix_width = captures["prefix"].chars().count();
    let connector = match &captures["connector"] {
        "├" => Connector::Branch,
        _ => Connector::Last,
    };
    let (name, id) = split_name_and_id(&captures["content"]);

    if name.is_empty() {
        return Err(ParseError::new(line_number, ParseErrorKind::EmptyName));
    }

    Ok(Some(TreeLine {
        line_number,
        prefix_width,
        connector,
        name,
        id,
    }))
}

/// Whether `name` would read back as `Name (id)` if written on its own.
pub fn has_id_suffix(name: &str) -> bool {
    ID_SUFFIX.is_match(name)
}

/// Split `Name (id)` into its trimmed parts. Empty parentheses mean no id.
pub fn split_name_and_id(content: &str) -> (String, Option<String>) {
    match ID_SUFFIX.captures(content) {
        Some(captures) => {
            let id = captures["id"].trim();
            (
                captures["name"].trim().to_string(),
                (!id.is_empty()).then(|| id.to_string()),
            )
        }
        None => (content.trim().to_string(), None),
    }
}
