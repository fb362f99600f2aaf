//! Shared error types for the crate

use thiserror::Error;

/// Reason a line of tree text could not be placed in the tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// No `├──`/`└──` connector, or stray text before it
    #[error("expected a `├──` or `└──` connector, found {content:?}")]
    UnrecognizedLine { content: String },

    /// Connector present but nothing after it
    #[error("folder name is empty")]
    EmptyName,

    /// Indentation went more than one level deeper than the previous line
    #[error("indentation jumps more than one level (column {column}, deepest allowed {max_column})")]
    IndentSkip { column: usize, max_column: usize },

    /// Indentation went back to a column no enclosing folder sits at
    #[error("indentation at column {column} does not match any enclosing folder")]
    UnmatchedDedent { column: usize },

    /// Indentation went deeper than the open folder by less than one level
    #[error("indentation at column {column} is not a whole level deeper (expected column {expected})")]
    MisalignedIndent { column: usize, expected: usize },
}

/// Fatal error raised while parsing tree text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number in the input
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Main error type for foldertree operations
#[derive(Debug, Error)]
pub enum Error {
    /// Tree text could not be parsed
    #[error("Parse error at {0}")]
    Parse(#[from] ParseError),

    /// A supplied tree breaks the depth invariant
    #[error("Invalid tree: {0}")]
    InvalidTree(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    /// Whether the user can fix this by correcting their input or config
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::Parse(_) | Self::InvalidTree(_) | Self::Configuration(_) | Self::Json(_)
        )
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Configuration(_) => 3,
            Self::InvalidTree(_) | Self::Json(_) => 4,
            Self::Parse(_) => 5,
            Self::Io(_) | Self::WithContext { .. } => 1,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
