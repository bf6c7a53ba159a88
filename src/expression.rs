use std::str::FromStr;

use crate::{
    ast::Expr,
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            core::{Context, EvalOptions, EvalResult, Evaluator},
            function::core::FunctionRegistry,
        },
        parser::core::parse_source,
        value::core::Value,
    },
    util::num::f64_to_i64,
};

const LOG_TARGET: &str = "expression";

/// A parsed rule expression.
///
/// An `Expression` owns the syntax tree produced by a successful parse,
/// together with the source text it came from. It is immutable: evaluation
/// only reads the tree, so one expression can be evaluated repeatedly and
/// concurrently against different contexts.
///
/// # Example
/// ```
/// use ruleval::{Context, Expression, FunctionRegistry, Value};
///
/// let rule = Expression::parse("age >= 18 && country.code == 1").unwrap();
/// let functions = FunctionRegistry::new();
///
/// let mut context = Context::new();
/// context.insert("age".to_string(), Value::Integer(21));
/// context.insert("country".to_string(),
///                [("code".to_string(), 1)].into_iter().collect());
///
/// assert!(rule.as_bool(&context, &functions).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    root:   Expr,
    source: String,
}

impl Expression {
    /// Parses expression text.
    ///
    /// # Returns
    /// - `Ok(Expression)`: If the whole input matches the grammar.
    /// - `Err(ParseError::Empty)`: If the input is empty.
    /// - `Err(ParseError)`: Any other syntax error, with its byte offset.
    ///
    /// # Example
    /// ```
    /// use ruleval::{Expression, error::ParseError};
    ///
    /// assert!(Expression::parse("a.b[0] > 1").is_ok());
    /// assert_eq!(Expression::parse(""), Err(ParseError::Empty));
    /// ```
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let root = parse_source(source)?;
        log::debug!(target: LOG_TARGET, "parsed '{source}' as {root}");
        Ok(Self { root,
                  source: source.to_string() })
    }

    /// Returns the root of the syntax tree.
    #[must_use]
    pub const fn root(&self) -> &Expr {
        &self.root
    }

    /// Returns the text the expression was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluates the expression against a context with default options.
    ///
    /// # Parameters
    /// - `context`: Values for the identifiers used by the expression.
    /// - `functions`: Functions the expression may call.
    ///
    /// # Example
    /// ```
    /// use ruleval::{Context, Expression, FunctionRegistry, Value};
    ///
    /// let expr = Expression::parse("1 + 2").unwrap();
    /// let value = expr.evaluate(&Context::new(), &FunctionRegistry::new()).unwrap();
    ///
    /// assert_eq!(value, Value::Real(3.0));
    /// ```
    pub fn evaluate(&self, context: &Context, functions: &FunctionRegistry) -> EvalResult<Value> {
        self.evaluate_with(context, functions, EvalOptions::default())
    }

    /// Evaluates the expression with explicit options.
    ///
    /// # Example
    /// ```
    /// use ruleval::{
    ///     Context, EvalOptions, Expression, FunctionRegistry, LiteralArguments, Value,
    /// };
    ///
    /// let expr = Expression::parse(r#"contains("rulebook", "rule")"#).unwrap();
    /// let functions = FunctionRegistry::with_builtins();
    /// let options = EvalOptions { literal_arguments: LiteralArguments::Typed };
    ///
    /// let value = expr.evaluate_with(&Context::new(), &functions, options).unwrap();
    /// assert_eq!(value, Value::Bool(true));
    /// ```
    pub fn evaluate_with(&self,
                         context: &Context,
                         functions: &FunctionRegistry,
                         options: EvalOptions)
                         -> EvalResult<Value> {
        Evaluator::new(context, functions).with_options(options)
                                          .eval(&self.root)
    }

    /// Evaluates the expression and requires a boolean result.
    ///
    /// # Returns
    /// - `Ok(bool)`: If the result is `Value::Bool`.
    /// - `Err(RuntimeError::ExpectedBoolean)`: If the result has another type.
    pub fn as_bool(&self, context: &Context, functions: &FunctionRegistry) -> EvalResult<bool> {
        self.evaluate(context, functions)?
            .as_bool(self.root.position())
    }

    /// Evaluates the expression and requires an integer result.
    ///
    /// Integers are returned as they are; floats are truncated toward zero.
    ///
    /// # Returns
    /// - `Ok(i64)`: If the result is an integer, or a float within the `i64`
    ///   range.
    /// - `Err(RuntimeError::TypeMismatch)`: Otherwise, including NaN and
    ///   infinite results.
    ///
    /// # Example
    /// ```
    /// use ruleval::{Context, Expression, FunctionRegistry};
    ///
    /// let expr = Expression::parse("7 / 2").unwrap();
    /// assert_eq!(expr.as_int(&Context::new(), &FunctionRegistry::new()).unwrap(), 3);
    /// ```
    pub fn as_int(&self, context: &Context, functions: &FunctionRegistry) -> EvalResult<i64> {
        match self.evaluate(context, functions)? {
            Value::Integer(n) => Ok(n),
            Value::Real(r) => f64_to_i64(r).ok_or_else(|| {
                                               let details = format!("float result {r} does not fit in an int");
                                               RuntimeError::TypeMismatch { details,
                                                                            position: self.root.position() }
                                           }),
            other => Err(self.result_mismatch("int", &other)),
        }
    }

    /// Evaluates the expression and requires a floating-point result.
    ///
    /// Floats are returned as they are; integers are widened.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the result is numeric.
    /// - `Err(RuntimeError::TypeMismatch)`: Otherwise.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self, context: &Context, functions: &FunctionRegistry) -> EvalResult<f64> {
        match self.evaluate(context, functions)? {
            Value::Real(r) => Ok(r),
            Value::Integer(n) => Ok(n as f64),
            other => Err(self.result_mismatch("float", &other)),
        }
    }

    fn result_mismatch(&self, expected: &str, found: &Value) -> RuntimeError {
        RuntimeError::TypeMismatch { details: format!("expected {expected} result, found {}",
                                                      found.type_name()),
                                     position: self.root.position() }
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
