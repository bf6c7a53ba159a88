//! # ruleval
//!
//! ruleval is an embeddable rule-expression evaluator written in Rust.
//! It parses infix rule expressions such as `order.total * 1.2 > limit &&
//! contains(tags, wanted)` once and evaluates them any number of times against
//! caller-supplied contexts, with decimal-accurate addition, subtraction and
//! multiplication and host functions supplied through a registry.
//!
//! By default a literal call argument reaches the function as its source text:
//! `contains(tags, "vip")` receives `"vip"` with its quotes. Evaluate with
//! [`LiteralArguments::Typed`] to pass literals as values instead.
//!
//! ```
//! use ruleval::{Context, Expression, FunctionRegistry, Value};
//!
//! let rule = Expression::parse("price * qty >= 0.3").unwrap();
//! let functions = FunctionRegistry::with_builtins();
//!
//! let mut context = Context::new();
//! context.insert("price".to_string(), Value::Real(0.1));
//! context.insert("qty".to_string(), Value::Integer(3));
//!
//! assert!(rule.as_bool(&context, &functions).unwrap());
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of a rule as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of expression node kinds.
/// - Attaches source offsets to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating an expression, and the [`ErrorKind`](error::ErrorKind)
/// classification shared by all of them.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator, host
///   functions).
/// - Attaches byte offsets and detailed messages for context.
pub mod error;
/// The parsed, reusable rule expression.
pub mod expression;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, parser, evaluator and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion.
///
/// # Responsibilities
/// - Decimal-accurate arithmetic on `f64` operands.
/// - Safe conversions between `i64` and `usize`.
pub mod util;

pub use crate::{
    error::{Error, ErrorKind},
    expression::Expression,
    interpreter::{
        evaluator::{
            core::{Context, EvalOptions, LiteralArguments},
            function::core::{FunctionRegistry, HostFunction},
        },
        value::core::Value,
    },
};

/// Parses and evaluates an expression in one step.
///
/// The expression is evaluated with the builtin functions and default
/// options. Applications that evaluate the same rule many times should parse
/// it once with [`Expression::parse`] instead.
///
/// # Errors
/// Returns [`Error::Parse`] if the text is not a valid expression and
/// [`Error::Runtime`] if evaluation fails.
///
/// # Examples
/// ```
/// use ruleval::{Context, Value, evaluate};
///
/// let mut context = Context::new();
/// context.insert("a".to_string(), Value::Integer(7));
///
/// assert_eq!(evaluate("a > 5 && a < 10", &context).unwrap(), Value::Bool(true));
///
/// // Missing keys never resolve to null.
/// assert!(evaluate("b > 5", &context).is_err());
/// ```
pub fn evaluate(source: &str, context: &Context) -> Result<Value, Error> {
    let expression = Expression::parse(source)?;
    let functions = FunctionRegistry::with_builtins();
    Ok(expression.evaluate(context, &functions)?)
}
