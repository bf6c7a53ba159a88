/// Core parsing entry points.
///
/// Contains the top-level expression parser and the parse result type.
pub mod core;

/// Binary operator parsing.
///
/// Implements one function per precedence tier, from logical OR down to
/// multiplication.
pub mod binary;

/// Unary, primary and postfix parsing.
///
/// Handles prefix operators, literals, identifiers, calls, parenthesized
/// expressions, index and member access.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides helpers shared by several grammar rules.
pub mod utils;
