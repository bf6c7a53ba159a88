/// Operator routing.
pub mod core;

/// Arithmetic operators (`+`, `-`, `*`, `/`).
pub mod arithmetic;

/// Equality and relational operators.
pub mod comparison;

/// Logical connectives (`&&`, `||`).
pub mod logic;
