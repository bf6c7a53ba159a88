use crate::error::{ErrorKind, FunctionError};

/// Represents all errors that can occur during evaluation.
///
/// Positions are byte offsets of the expression node that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Encountered an expression that has no evaluation rule.
    #[error("Error at offset {position}: Unsupported expression: {details}.")]
    UnsupportedExpression {
        /// Description of the expression.
        details:  String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// A literal of a kind that cannot become a value (imaginary, character).
    #[error("Error at offset {position}: Unsupported parameter {literal}.")]
    UnsupportedParam {
        /// The literal text.
        literal:  String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// Numeric literal text could not be converted.
    #[error("Error at offset {position}: Invalid literal {literal}.")]
    InvalidLiteral {
        /// The literal text.
        literal:  String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// A numeric value was expected, but not found.
    #[error("Error at offset {position}: Expected number, found {found}.")]
    ExpectedNumber {
        /// Type of the value that was found.
        found:    &'static str,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// A list index did not evaluate to an integer.
    #[error("Error at offset {position}: List index must be an integer, found {found}.")]
    IndexNotNumber {
        /// Type of the value that was found.
        found:    &'static str,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// Tried to access a list element outside the list.
    #[error("Error at offset {position}: Index {index} out of bounds for list of length {len}.")]
    IndexOutOfBounds {
        /// The requested index.
        index:    i64,
        /// The length of the list.
        len:      usize,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// A boolean value was expected, but not found.
    #[error("Error at offset {position}: Expected boolean, found {found}.")]
    ExpectedBoolean {
        /// Type of the value that was found.
        found:    &'static str,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// An identifier or member was not present.
    #[error("Error at offset {position}: Key '{name}' not found.")]
    KeyNotFound {
        /// The missing key.
        name:     String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// Attempted division by zero.
    #[error("Error at offset {position}: Division by zero.")]
    DivisionByZero {
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// Called a function that is not registered.
    #[error("Error at offset {position}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// A registered function returned an error.
    #[error("Error at offset {position}: Function '{name}' failed: {source}.")]
    Function {
        /// The name of the function.
        name:     String,
        /// The error returned by the function.
        source:   FunctionError,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error at offset {position}: Type error: {details}.")]
    TypeMismatch {
        /// Details about the type mismatch.
        details:  String,
        /// Byte offset where the error occurred.
        position: usize,
    },
}

impl RuntimeError {
    /// Returns the error kind.
    ///
    /// # Example
    /// ```
    /// use ruleval::error::{ErrorKind, RuntimeError};
    ///
    /// let err = RuntimeError::DivisionByZero { position: 2 };
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedExpression { .. } => ErrorKind::UnsupportedExpr,
            Self::UnsupportedParam { .. } => ErrorKind::UnsupportedParam,
            Self::InvalidLiteral { .. } => ErrorKind::InvalidLiteral,
            Self::ExpectedNumber { .. } => ErrorKind::NotNumber,
            Self::IndexNotNumber { .. } => ErrorKind::IndexNotNumber,
            Self::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            Self::ExpectedBoolean { .. } => ErrorKind::NotBool,
            Self::KeyNotFound { .. } => ErrorKind::KeyNotFound,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::UnknownFunction { .. } => ErrorKind::UnknownFunction,
            Self::Function { .. } => ErrorKind::FunctionFailed,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }

    /// Returns the byte offset of the expression that failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnsupportedExpression { position, .. }
            | Self::UnsupportedParam { position, .. }
            | Self::InvalidLiteral { position, .. }
            | Self::ExpectedNumber { position, .. }
            | Self::IndexNotNumber { position, .. }
            | Self::IndexOutOfBounds { position, .. }
            | Self::ExpectedBoolean { position, .. }
            | Self::KeyNotFound { position, .. }
            | Self::DivisionByZero { position }
            | Self::UnknownFunction { position, .. }
            | Self::Function { position, .. }
            | Self::TypeMismatch { position, .. } => *position,
        }
    }
}
