//! Parser for `wb folder tree` box-drawing output.
//!
//! ```text
//! ├── Genomics (de5bf30a-78a6-4686-92e6-687b472b1475)
//! │   ├── Variant Files (d018eff8-bba1-4d59-b9e0-a7db7ed66422)
//! │   └── Aligned Files (f6cc00ad-9d66-4644-8543-7c3ced6bd63f)
//! └── Clinical (05f362fe-d205-44a3-b5a8-4ad6d242e8ac)
//!     └── Synthetic Data (d6e9058e-976f-4f51-9352-43abe59657b7)
//! ```
//!
//! Each line is normalized by [`line::parse_line`] and then placed using a
//! stack of open folders keyed by indentation column. Malformed indentation
//! aborts the whole parse; no partial tree is ever returned.

pub mod line;

use crate::core::{FolderNode, ParseError, ParseErrorKind};

pub use line::{parse_line, Connector, TreeLine};

/// Columns per nesting level in `wb folder tree` output (`│   `)
pub const DEFAULT_INDENT_STEP: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Width of one nesting level in characters
    pub indent_step: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            indent_step: DEFAULT_INDENT_STEP,
        }
    }
}

/// A folder whose children are still being collected.
struct Frame {
    column: usize,
    connector: Connector,
    node: FolderNode,
}

/// Stateless tree-text parser; all parse state lives in a single `parse` call.
#[derive(Debug, Clone, Default)]
pub struct TreeParser {
    options: ParserOptions,
}

impl TreeParser {
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options: ParserOptions {
                indent_step: options.indent_step.max(1),
            },
        }
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Parse tree text into its top-level folders.
    pub fn parse(&self, text: &str) -> Result<Vec<FolderNode>, ParseError> {
        let step = self.options.indent_step;
        // Synthetic root at column 0, never returned.
        let mut stack = vec![Frame {
            column: 0,
            connector: Connector::Last,
            node: FolderNode::new("", None, 0),
        }];

        for (index, raw) in text.lines().enumerate() {
            let Some(line) = line::parse_line(index + 1, raw)? else {
                continue;
            };
            let column = line.prefix_width + step;
            tracing::trace!(
                line = line.line_number,
                column,
                name = %line.name,
                "tree line"
            );

            self.close_until(&mut stack, &line, column)?;
            let depth = stack.len();
            stack.push(Frame {
                column,
                connector: line.connector,
                node: FolderNode::new(line.name, line.id, depth),
            });
        }

        while stack.len() > 1 {
            close_top(&mut stack);
        }
        let roots = stack.pop().map(|root| root.node.children).unwrap_or_default();
        tracing::debug!(top_level = roots.len(), "parsed folder tree");
        Ok(roots)
    }

    /// Close open folders until the top of the stack can be the parent of a
    /// line at `column`.
    fn close_until(
        &self,
        stack: &mut Vec<Frame>,
        line: &TreeLine,
        column: usize,
    ) -> Result<(), ParseError> {
        let step = self.options.indent_step;
        let top = stack.last().map_or(0, |frame| frame.column);

        if column > top + step {
            return Err(ParseError::new(
                line.line_number,
                ParseErrorKind::IndentSkip {
                    column,
                    max_column: top + step,
                },
            ));
        }

        let open = stack.len();
        while stack.last().is_some_and(|frame| frame.column > column) {
            close_top(stack);
        }

        let top = stack.last().map_or(0, |frame| frame.column);
        if top == column && stack.len() > 1 {
            // Sibling of the open folder at the same column
            if stack.last().is_some_and(|frame| frame.connector == Connector::Last) {
                tracing::warn!(
                    line = line.line_number,
                    name = %line.name,
                    "folder follows a `└──` sibling"
                );
            }
            close_top(stack);
            Ok(())
        } else if top + step == column {
            Ok(())
        } else if stack.len() == open {
            Err(ParseError::new(
                line.line_number,
                ParseErrorKind::MisalignedIndent {
                    column,
                    expected: top + step,
                },
            ))
        } else {
            Err(ParseError::new(
                line.line_number,
                ParseErrorKind::UnmatchedDedent { column },
            ))
        }
    }
}

/// Pop the top frame and append it to its parent's children.
fn close_top(stack: &mut Vec<Frame>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(frame) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.node.children.push(frame.node);
        }
    }
}

/// Parse tree text with default options.
pub fn parse_tree(text: &str) -> Result<Vec<FolderNode>, ParseError> {
    TreeParser::default().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_folders() {
        assert_eq!(parse_tree("").unwrap(), Vec::<FolderNode>::new());
        assert_eq!(parse_tree("\n  \n").unwrap(), Vec::<FolderNode>::new());
    }

    #[test]
    fn test_single_folder_with_two_children() {
        let text = "└── Clinical (1)\n    ├── Raw (2)\n    └── Synthetic Data (3)\n";
        let tree = parse_tree(text).unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].depth, 1);
        let names: Vec<&str> = tree[0].children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Raw", "Synthetic Data"]);
        assert!(tree[0].children.iter().all(|c| c.depth == 2));
    }

    #[test]
    fn test_siblings_after_deep_nesting() {
        let text = "\
├── a (1)
│   └── b (2)
│       └── c (3)
└── d (4)";
        let tree = parse_tree(text).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].children[0].children[0].name, "c");
        assert_eq!(tree[0].children[0].children[0].depth, 3);
        assert_eq!(tree[1].name, "d");
        assert!(tree[1].is_leaf());
    }

    #[test]
    fn test_indent_skip_is_fatal() {
        let text = "├── a (1)\n│       └── c (3)\n";
        let err = parse_tree(text).unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(
            err.kind,
            ParseErrorKind::IndentSkip {
                column: 12,
                max_column: 8
            }
        );
    }

    #[test]
    fn test_first_line_must_be_top_level() {
        let err = parse_tree("│   ├── orphan (1)").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::IndentSkip { .. }));
    }

    #[test]
    fn test_dedent_to_unknown_column_is_fatal() {
        let text = "├── a (1)\n│   ├── b (2)\n│   │   └── c (3)\n│  └── d (4)\n";
        let err = parse_tree(text).unwrap_err();
        assert_eq!(err.line, 4);
        assert_eq!(err.kind, ParseErrorKind::UnmatchedDedent { column: 7 });
    }

    #[test]
    fn test_misaligned_nesting_is_fatal() {
        let err = parse_tree("├── a (1)\n  └── b (2)").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::MisalignedIndent {
                column: 6,
                expected: 8
            }
        );
    }

    #[test]
    fn test_custom_indent_step() {
        let parser = TreeParser::new(ParserOptions { indent_step: 2 });
        let tree = parser.parse("├── a\n│ └── b\n└── c").unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].children[0].name, "b");
        assert_eq!(tree[0].children[0].depth, 2);
    }

    #[test]
    fn test_zero_indent_step_is_clamped() {
        let parser = TreeParser::new(ParserOptions { indent_step: 0 });
        assert_eq!(parser.options().indent_step, 1);
    }

    #[test]
    fn test_sibling_after_last_connector_is_kept() {
        let tree = parse_tree("└── a (1)\n└── b (2)\n├── c (3)").unwrap();
        let names: Vec<&str> = tree.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unrecognized_line_aborts_parse() {
        let err = parse_tree("├── a (1)\nnot a tree line\n").unwrap_err();
        assert_eq!(err.line, 2);
    }
}
