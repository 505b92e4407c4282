//! DOT import errors.

use thiserror::Error;

/// Errors that can occur when importing a DOT graph.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ImportError {
    /// The text is not valid DOT. Carries the parser's message.
    #[error("DOT parse error: {0}")]
    Parse(String),

    /// Valid DOT that cannot describe a transition table.
    #[error("unsupported DOT construct: {0}")]
    Unsupported(String),
}
