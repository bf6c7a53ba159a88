use crate::{error::ErrorKind, interpreter::parser::core::MAX_DEPTH};

/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the expression text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The expression text was empty.
    #[error("Rule is empty.")]
    Empty,
    /// Found a character sequence that is not a token.
    #[error("Error at offset {position}: Unrecognized input '{text}'.")]
    UnrecognizedInput {
        /// The offending text.
        text:     String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    #[error("Error at offset {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// Description of the token encountered.
        token:    String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error at offset {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Byte offset where the error occurred (the input length).
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at offset {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },
    /// A closing bracket `]` was expected but not found.
    #[error("Error at offset {position}: Expected closing bracket ']' but none found.")]
    ExpectedClosingBracket {
        /// Byte offset of the opening bracket.
        position: usize,
    },
    /// A call was applied to something other than a bare identifier.
    #[error("Error at offset {position}: Only named functions can be called.")]
    InvalidCallTarget {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },
    /// The expression tree would be taller than [`MAX_DEPTH`] levels.
    #[error("Error at offset {position}: Expression nests more than {} levels deep.", MAX_DEPTH)]
    NestingTooDeep {
        /// Byte offset of the token that crossed the limit.
        position: usize,
    },
    /// Found extra tokens after the expression should have ended.
    #[error("Error at offset {position}: Extra tokens after expression: {token}.")]
    UnexpectedTrailingTokens {
        /// The extra token.
        token:    String,
        /// Byte offset where the error occurred.
        position: usize,
    },
}

impl ParseError {
    /// Returns the error kind. Everything except [`ParseError::Empty`] is a
    /// syntax error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Empty => ErrorKind::EmptyExpression,
            _ => ErrorKind::SyntaxError,
        }
    }
}
