/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparison and logical operators, including the
/// decimal-accurate addition, subtraction and multiplication.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the evaluator, its options, the context type and the main
/// dispatch over expression kinds.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides the per-node evaluation routines (literals, identifiers, member
/// access, indexing and calls) used by the core dispatch.
pub mod utils;

/// Function evaluation.
///
/// Holds the function registry, the builtin functions and call dispatch.
pub mod function;
