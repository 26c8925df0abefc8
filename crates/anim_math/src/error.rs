//! Error types for text input

use thiserror::Error;

use crate::vector::Axis;

/// Reasons a line of text is not a `(X, Y, Z)` vector
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVectorError {
    /// No `(` in the input
    #[error("missing opening parenthesis")]
    MissingOpenParen,

    /// No `)` in the input
    #[error("missing closing parenthesis")]
    MissingCloseParen,

    /// Fewer than two commas after the opening parenthesis
    #[error("expected two commas, found {found}")]
    MissingComma { found: usize },

    /// Delimiters present but not in `( , , )` order
    #[error("delimiters out of order")]
    Misordered,

    /// A component is not a decimal number
    #[error("invalid {axis} component: {text:?}")]
    InvalidComponent { axis: Axis, text: String },
}

/// Result type for vector parsing
pub type Result<T> = std::result::Result<T, ParseVectorError>;
