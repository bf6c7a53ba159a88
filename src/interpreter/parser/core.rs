use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_logical_or,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum height of an expression tree.
///
/// Deeper input is rejected with [`ParseError::NestingTooDeep`], which keeps
/// parsing, evaluation and dropping of the tree within a bounded stack.
pub const MAX_DEPTH: usize = 128;

/// A parsed sub-expression paired with the height of its tree.
pub type Parsed = (Expr, usize);

/// Enters one level of parser recursion at `position`.
///
/// Returns the depth for the nested rule, or `NestingTooDeep` once
/// [`MAX_DEPTH`] is reached.
pub(crate) const fn descend(depth: usize, position: usize) -> ParseResult<usize> {
    if depth >= MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { position });
    }
    Ok(depth + 1)
}

/// Checks the height of a node built at `position`.
pub(crate) const fn bounded_height(height: usize, position: usize) -> ParseResult<usize> {
    if height > MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { position });
    }
    Ok(height)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
/// - `depth`: Number of enclosing groupings, index brackets, call argument
///   lists and prefix operators.
///
/// # Returns
/// The parsed expression node and its height.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical_or(tokens, depth)
}

/// Parses source text into a single expression tree.
///
/// The whole input must form exactly one expression. Parsing stops at the
/// first error; no partial tree is returned.
///
/// # Errors
/// - `Empty` if `source` has no characters at all.
/// - `UnrecognizedInput` if the lexer meets text that is not a token.
/// - `UnexpectedTrailingTokens` if tokens remain after a complete expression.
/// - `NestingTooDeep` if the tree would be taller than [`MAX_DEPTH`].
/// - Any error raised by the grammar rules.
///
/// # Example
/// ```
/// use ruleval::{ast::Expr, error::ParseError, interpreter::parser::core::parse_source};
///
/// let expr = parse_source("(a)").unwrap();
/// assert!(matches!(expr, Expr::Grouping { .. }));
///
/// assert_eq!(parse_source(""), Err(ParseError::Empty));
/// assert!(matches!(parse_source("a b"),
///                  Err(ParseError::UnexpectedTrailingTokens { position: 2, .. })));
/// assert_eq!(parse_source("1 +"),
///            Err(ParseError::UnexpectedEndOfInput { position: 3 }));
///
/// let deep = format!("{}1{}", "(".repeat(500), ")".repeat(500));
/// assert!(matches!(parse_source(&deep), Err(ParseError::NestingTooDeep { .. })));
/// ```
pub fn parse_source(source: &str) -> ParseResult<Expr> {
    if source.is_empty() {
        return Err(ParseError::Empty);
    }

    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let parsed = parse_expression(&mut iter, 0).and_then(|(expr, _)| match iter.next() {
                                                    Some((tok, position)) => {
                                                        Err(ParseError::UnexpectedTrailingTokens {
                                                            token: tok.to_string(),
                                                            position: *position,
                                                        })
                                                    },
                                                    None => Ok(expr),
                                                });

    // Grammar rules cannot see the input length, so end-of-input errors are
    // positioned here.
    parsed.map_err(|e| match e {
              ParseError::UnexpectedEndOfInput { .. } => {
                  ParseError::UnexpectedEndOfInput { position: source.len() }
              },
              other => other,
          })
}
