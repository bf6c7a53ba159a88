/// Errors reported by host functions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FunctionError {
    /// The function received the wrong number of arguments.
    #[error("expected {expected} argument(s), found {found}")]
    ArgumentCount {
        /// Number of arguments the function accepts.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
    },
    /// An argument had an unusable type or value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The function failed for another reason.
    #[error("{0}")]
    Failed(String),
}
