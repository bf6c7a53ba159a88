use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parsed, bounded_height, descend, parse_expression},
            utils::{parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
/// - `+`  (accepted by the grammar, rejected by the evaluator)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`] and then applies any postfix operators via
/// [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "!" | "+") unary
///            | primary postfix*
/// ```
/// Each prefix operator counts as one level of nesting.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression possibly followed by postfixes,
/// with the height of the tree.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => Some(UnaryOperator::Negate),
        Some((Token::Bang, _)) => Some(UnaryOperator::Not),
        Some((Token::Plus, _)) => Some(UnaryOperator::Plus),
        _ => None,
    };

    if let Some(op) = op
       && let Some((_, position)) = tokens.next()
    {
        let (expr, height) = parse_unary(tokens, descend(depth, *position)?)?;
        return Ok((Expr::UnaryOp { op,
                                   expr: Box::new(expr),
                                   position: *position },
                   bounded_height(height + 1, *position)?));
    }

    let primary = parse_primary(tokens, depth)?;
    parse_postfix(tokens, depth, primary)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - string and numeric literals
/// - identifiers
/// - function calls
/// - parenthesized expressions
///
/// This function does not handle unary operators or postfix operators.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier
///              | identifier "(" arguments ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The parsed primary [`Expr`] and its height, or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;

    match peeked {
        (Token::Real(..)
         | Token::Integer(..)
         | Token::Imaginary(..)
         | Token::Str(..)
         | Token::Char(..),
         _) => Ok((parse_literal(tokens)?, 1)),
        (Token::LParen, _) => parse_grouping(tokens, depth),
        (Token::Identifier(_), _) => parse_identifier_or_call(tokens, depth),
        (tok, position) => Err(ParseError::UnexpectedToken { token:    format!("'{tok}'"),
                                                             position: *position, }),
    }
}

/// Parses postfix operators applied to an expression.
///
/// This function is called after parsing a primary expression and handles:
///
/// 1. **Indexing** `expr[ index ]`
/// 2. **Member access** `expr.name`
///
/// Both can be chained in any order: `orders[0].items[2].sku`.
///
/// A `(` at this point means a call on something that is not a bare
/// identifier, which the grammar does not allow.
///
/// Grammar:
/// ```text
///     postfix := "[" expression "]"
///              | "." identifier
/// ```
/// # Parameters
/// - `tokens`: Token iterator after a primary expression.
/// - `depth`: Current nesting depth; an index expression is parsed one level
///   deeper.
/// - `node`: The expression to which postfix operators will be applied, with
///   its height.
///
/// # Returns
/// An updated [`Expr`] with all postfix operators folded in, with its height.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an `[` is not properly closed with `]`,
/// - `.` is not followed by an identifier,
/// - a call is applied to a non-identifier,
/// - the chain makes the tree too deep.
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>,
                        depth: usize,
                        (mut node, mut height): Parsed)
                        -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    loop {
        match tokens.peek() {
            Some((Token::LBracket, position)) => {
                let position = *position;
                tokens.next();
                let (index, index_height) = parse_expression(tokens, descend(depth, position)?)?;
                match tokens.next() {
                    Some((Token::RBracket, _)) => {
                        height = bounded_height(height.max(index_height) + 1, position)?;
                        node = Expr::Index { target: Box::new(node),
                                             index: Box::new(index),
                                             position };
                    },
                    _ => return Err(ParseError::ExpectedClosingBracket { position }),
                }
            },
            Some((Token::Dot, position)) => {
                let position = *position;
                tokens.next();
                let name = parse_identifier(tokens)?;
                height = bounded_height(height + 1, position)?;
                node = Expr::Member { target: Box::new(node),
                                      name,
                                      position };
            },
            Some((Token::LParen, position)) => {
                return Err(ParseError::InvalidCallTarget { position: *position });
            },
            _ => break,
        }
    }
    Ok((node, height))
}

/// Parses a string or numeric literal.
///
/// The literal keeps its source text; conversion happens during evaluation.
///
/// Grammar (simplified):
/// ```text
///     literal := STRING | INTEGER | REAL | IMAGINARY | CHAR
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at a literal.
///
/// # Returns
/// An [`Expr::Literal`] containing the literal.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (tok, position) = tokens.next()
                                .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;
    let value = match tok {
        Token::Str(s) => LiteralValue::String(s.clone()),
        Token::Integer(s) => LiteralValue::Integer(s.clone()),
        Token::Real(s) => LiteralValue::Real(s.clone()),
        Token::Imaginary(s) => LiteralValue::Imaginary(s.clone()),
        Token::Char(s) => LiteralValue::Char(s.clone()),
        other => {
            return Err(ParseError::UnexpectedToken { token:    format!("'{other}'"),
                                                     position: *position, });
        },
    };

    Ok(Expr::Literal { value,
                       position: *position })
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An [`Expr::Grouping`] wrapping the inner expression, with its height.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, position) = tokens.next()
                              .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;
    let (expr, height) = parse_expression(tokens, descend(depth, *position)?)?;
    match tokens.next() {
        Some((Token::RParen, _)) => {
            Ok((Expr::Grouping { expr:     Box::new(expr),
                                 position: *position, },
                bounded_height(height + 1, *position)?))
        },
        _ => Err(ParseError::ExpectedClosingParen { position: *position }),
    }
}

/// Parses an identifier or function call.
///
/// Supported forms:
///
/// - identifier
/// - identifier(arg1, arg2, ...)
///
/// `true` and `false` are parsed as identifiers; the evaluator gives them
/// their boolean meaning.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `depth`: Current nesting depth; arguments are parsed one level deeper.
///
/// # Returns
/// - [`Expr::Call`] if followed by parentheses,
/// - [`Expr::Identifier`] otherwise,
///
/// together with the height of the tree.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the initial token is not an identifier,
/// - call arguments fail to parse,
/// - the closing `)` is missing.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let position = tokens.peek().map_or(0, |(_, position)| *position);
    let name = parse_identifier(tokens)?;

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let inner = descend(depth, position)?;
            let parsed = parse_comma_separated(tokens,
                                               |tokens| parse_expression(tokens, inner),
                                               &Token::RParen)?;

            let height = parsed.iter().map(|(_, height)| *height).max().unwrap_or(0);
            let arguments = parsed.into_iter().map(|(arg, _)| arg).collect();
            Ok((Expr::Call { name,
                             arguments,
                             position },
                bounded_height(height + 1, position)?))
        },
        _ => Ok((Expr::Identifier { name, position }, 1)),
    }
}
