//! Logging infrastructure.
//!
//! Library code logs through `tracing` (parser, tree loading) and `log`
//! (config discovery). The binary installs one subscriber at startup:
//!
//! ```ignore
//! use foldertree::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing(cli.verbosity);
//!     // ... rest of application
//! }
//! ```

pub mod tracing;

pub use self::tracing::{init_tracing, level_for_verbosity};
