use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parsed, bounded_height},
            unary::parse_unary,
        },
    },
};

/// Parses one left-associative precedence tier.
///
/// Repeatedly parses an operand with `next`, and while the upcoming token maps
/// to an operator accepted by `accepts`, folds the pair into a
/// `Expr::BinaryOp` whose left side is everything parsed so far.
///
/// The chain is built in a loop, so each fold adds one level to the tree
/// without adding parser recursion. The height is checked on every fold.
///
/// Grammar (shape): `tier := next (op next)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `depth`: Current nesting depth, passed on unchanged to `next`.
/// - `accepts`: Operators that belong to this tier.
/// - `next`: Parser for the next-higher precedence tier.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           depth: usize,
                           accepts: fn(BinaryOperator) -> bool,
                           next: fn(&mut Peekable<I>, usize) -> ParseResult<Parsed>)
                           -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (mut left, mut height) = next(tokens, depth)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && accepts(op)
        {
            let position = *position;
            tokens.next();

            let (right, right_height) = next(tokens, depth)?;
            height = bounded_height(height.max(right_height) + 1, position)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok((left, height))
}

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `||`. This is the lowest precedence
/// tier.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::Or`.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens,
                     depth,
                     |op| matches!(op, BinaryOperator::Or),
                     parse_logical_and)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `&&`.
/// Precedence is higher than OR and lower than equality.
///
/// Grammar: `logical_and := equality ("&&" equality)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
///
/// # Returns
/// A binary expression tree with `BinaryOperator::And` nodes.
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens,
                     depth,
                     |op| matches!(op, BinaryOperator::And),
                     parse_equality)
}

/// Parses equality operators `==` and `!=`.
///
/// Grammar: `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, depth, is_equality_op, parse_relational)
}

/// Parses relational operators `<`, `>`, `<=` and `>=`.
///
/// Grammar: `relational := additive (("<" | ">" | "<=" | ">=") additive)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, depth, is_relational_op, parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens,
                     depth,
                     |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
                     parse_multiplicative)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens,
                     depth,
                     |op| matches!(op, BinaryOperator::Mul | BinaryOperator::Div),
                     parse_unary)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// and `None` for all other tokens. Note that `-` maps to subtraction here;
/// whether it is actually used as negation depends on where the parser meets
/// it.
///
/// # Example
/// ```
/// use ruleval::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::AndAnd),
///            Some(BinaryOperator::And));
/// assert_eq!(token_to_binary_operator(&Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::AndAnd => Some(BinaryOperator::And),
        Token::OrOr => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Returns `true` for the ordering operators `<`, `>`, `<=`, `>=`.
///
/// # Example
/// ```
/// use ruleval::{ast::BinaryOperator, interpreter::parser::binary::is_relational_op};
///
/// assert!(is_relational_op(BinaryOperator::Less));
/// assert!(!is_relational_op(BinaryOperator::Equal));
/// ```
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual)
}

/// Returns `true` for `==` and `!=`.
#[must_use]
pub const fn is_equality_op(op: BinaryOperator) -> bool {
    matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
}
