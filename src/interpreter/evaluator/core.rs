use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{evaluator::function::core::FunctionRegistry, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The data an expression is evaluated against.
///
/// Identifiers are looked up here. A context is supplied per evaluation and is
/// only ever read.
pub type Context = HashMap<String, Value>;

/// How literal arguments of call expressions reach the called function.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LiteralArguments {
    /// Literal arguments are passed as `Value::String` holding their source
    /// text, quotes included (`f("a", 1)` passes `"\"a\""` and `"1"`). Every
    /// other argument is evaluated.
    #[default]
    Raw,
    /// Every argument is evaluated, literals included.
    Typed,
}

/// Settings that change how expressions are evaluated.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Treatment of literal call arguments.
    pub literal_arguments: LiteralArguments,
}

/// Evaluates expression trees against a context.
///
/// The evaluator only borrows its inputs. Evaluation is a pure function of the
/// expression, the context, the registered functions and the options: the same
/// tree can be evaluated any number of times, from any number of threads.
///
/// ## Usage
///
/// An `Evaluator` is cheap to build; create one per context.
///
/// ```
/// use ruleval::{
///     Expression,
///     interpreter::{
///         evaluator::{
///             core::{Context, Evaluator},
///             function::core::FunctionRegistry,
///         },
///         value::core::Value,
///     },
/// };
///
/// let expr = Expression::parse("price * qty").unwrap();
/// let functions = FunctionRegistry::new();
///
/// let mut context = Context::new();
/// context.insert("price".to_string(), Value::Real(0.1));
/// context.insert("qty".to_string(), Value::Integer(3));
///
/// let evaluator = Evaluator::new(&context, &functions);
/// assert_eq!(evaluator.eval(expr.root()).unwrap(), Value::Real(0.3));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    pub(crate) context:   &'a Context,
    pub(crate) functions: &'a FunctionRegistry,
    pub(crate) options:   EvalOptions,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator with default options.
    #[must_use]
    pub fn new(context: &'a Context, functions: &'a FunctionRegistry) -> Self {
        Self { context,
               functions,
               options: EvalOptions::default() }
    }

    /// Replaces the evaluator's options.
    #[must_use]
    pub const fn with_options(mut self, options: EvalOptions) -> Self {
        self.options = options;
        self
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals,
    /// identifiers, unary and binary operations, groupings, indexing, member
    /// access and function calls. Sub-expressions are evaluated by recursive
    /// calls on the child nodes; the tree is never modified.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Errors
    /// The first error raised anywhere in the tree aborts evaluation and is
    /// returned unchanged.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, position } => Self::eval_literal(value, *position),
            Expr::Identifier { name, position } => lookup_key(self.context, name, *position),
            Expr::UnaryOp { op, expr, position } => self.eval_unary_op(*op, expr, *position),
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => self.eval_binary_op(left, *op, right, *position),
            Expr::Grouping { expr, .. } => self.eval(expr),
            Expr::Index { target,
                          index,
                          position, } => self.eval_index(target, index, *position),
            Expr::Member { target,
                           name,
                           position, } => self.eval_member(target, name, *position),
            Expr::Call { name,
                         arguments,
                         position, } => self.eval_call(name, arguments, *position),
        }
    }
}

/// Looks up an identifier in a map.
///
/// The names `true` and `false` always resolve to booleans, before the map is
/// consulted. Any other name must be present; a missing key is an error and
/// never resolves to `Null`.
///
/// # Parameters
/// - `map`: The context, or a map reached through member access.
/// - `name`: The identifier.
/// - `position`: Source offset for error reporting.
///
/// # Example
/// ```
/// use ruleval::interpreter::{
///     evaluator::core::{Context, lookup_key},
///     value::core::Value,
/// };
///
/// let mut context = Context::new();
/// context.insert("true".to_string(), Value::Integer(0));
/// context.insert("n".to_string(), Value::Integer(3));
///
/// assert_eq!(lookup_key(&context, "true", 0).unwrap(), Value::Bool(true));
/// assert_eq!(lookup_key(&context, "n", 0).unwrap(), Value::Integer(3));
/// assert!(lookup_key(&context, "m", 0).is_err());
/// ```
pub fn lookup_key(map: &HashMap<String, Value>, name: &str, position: usize) -> EvalResult<Value> {
    match name {
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        _ => map.get(name)
                .cloned()
                .ok_or_else(|| RuntimeError::KeyNotFound { name: name.to_string(),
                                                           position }),
    }
}
