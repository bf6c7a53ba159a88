/// The evaluator module reduces AST nodes to values.
///
/// The evaluator walks the AST against a caller-supplied context, applies
/// operators with their coercion rules, and dispatches call expressions to the
/// function registry. It never modifies the tree it walks.
///
/// # Responsibilities
/// - Evaluates every AST node kind.
/// - Resolves identifiers, members and indices against the context.
/// - Reports runtime errors such as missing keys or division by zero.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each paired with its byte offset. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Recognizes string and numeric literals, identifiers and operators.
/// - Reports input that is not a token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the structure of the expression, honoring operator
/// precedence and left associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with their offsets.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` union that flows through evaluation and
/// is supplied by callers in the context: booleans, integers, floats, strings,
/// maps, lists and null. It also bridges values to and from JSON.
pub mod value;
