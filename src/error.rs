/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include empty input, unexpected tokens and
/// unbalanced delimiters, all detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation.
/// Runtime errors include missing context keys, division by zero, operands of
/// the wrong type and failures reported by host functions.
pub mod runtime_error;
/// Host function errors.
///
/// The error type returned by functions registered in a
/// [`FunctionRegistry`](crate::interpreter::evaluator::function::core::FunctionRegistry).
pub mod function_error;

pub use function_error::FunctionError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Classifies an error independently of where it was raised.
///
/// Embedding applications usually only care about the kind of failure (for
/// instance, to treat a missing key as "rule does not apply" while treating a
/// syntax error as a configuration bug).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The expression text was empty.
    EmptyExpression,
    /// The expression text does not match the grammar.
    SyntaxError,
    /// An expression node has no evaluation rule.
    UnsupportedExpr,
    /// A literal kind cannot be converted to a value.
    UnsupportedParam,
    /// Numeric literal text could not be converted.
    InvalidLiteral,
    /// An arithmetic or comparison operand is not numeric.
    NotNumber,
    /// A list index is not an integer.
    IndexNotNumber,
    /// A list index is outside the list.
    IndexOutOfBounds,
    /// A logical operand is not boolean.
    NotBool,
    /// An identifier or member is missing.
    KeyNotFound,
    /// The divisor of `/` is zero.
    DivisionByZero,
    /// A call names a function that is not registered.
    UnknownFunction,
    /// A host function reported an error.
    FunctionFailed,
    /// A value has the wrong container kind or the wrong result type.
    TypeMismatch,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::EmptyExpression => "empty expression",
            Self::SyntaxError => "syntax error",
            Self::UnsupportedExpr => "unsupported expression",
            Self::UnsupportedParam => "unsupported parameter",
            Self::InvalidLiteral => "invalid literal",
            Self::NotNumber => "not a number",
            Self::IndexNotNumber => "index not a number",
            Self::IndexOutOfBounds => "index out of bounds",
            Self::NotBool => "not boolean",
            Self::KeyNotFound => "key not found",
            Self::DivisionByZero => "division by zero",
            Self::UnknownFunction => "unknown function",
            Self::FunctionFailed => "function failed",
            Self::TypeMismatch => "type mismatch",
        };
        write!(f, "{name}")
    }
}

/// Any error produced while parsing or evaluating an expression.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The expression could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the kind of the underlying error.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use ruleval::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("missing > 1", &HashMap::new()).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::KeyNotFound);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}
