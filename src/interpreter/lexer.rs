use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Literal tokens keep their source text; numbers are converted during
/// evaluation.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14`, `1.`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().to_string())]
    Real(String),
    /// Integer literal tokens, such as `42` or `0x2A`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    #[regex(r"0[xX][0-9a-fA-F_]+", |lex| lex.slice().to_string())]
    #[regex(r"0[oO][0-7_]+", |lex| lex.slice().to_string())]
    #[regex(r"0[bB][01_]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// Imaginary literal tokens, such as `2i` or `1.5i`.
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?i", |lex| lex.slice().to_string())]
    Imaginary(String),
    /// String literal tokens, quotes included: double-quoted with backslash
    /// escapes, or back-quoted raw strings.
    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| lex.slice().to_string())]
    #[regex(r"`[^`]*`", |lex| lex.slice().to_string())]
    Str(String),
    /// Character literal, quotes included.
    #[regex(r"'([^'\\\n]|\\.)*'", |lex| lex.slice().to_string())]
    Char(String),
    /// Identifier tokens; context keys or function names such as `age` or
    /// `contains`. `true` and `false` are identifiers too.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Bang,

    /// Spaces, tabs, newlines and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(s)
            | Self::Integer(s)
            | Self::Imaginary(s)
            | Self::Str(s)
            | Self::Char(s)
            | Self::Identifier(s) => write!(f, "{s}"),
            Self::AndAnd => write!(f, "&&"),
            Self::OrOr => write!(f, "||"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Dot => write!(f, "."),
            Self::Comma => write!(f, ","),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::LessEqual => write!(f, "<="),
            Self::GreaterEqual => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Bang => write!(f, "!"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Splits the source text into tokens paired with their byte offsets.
///
/// # Errors
/// Returns [`ParseError::UnrecognizedInput`] at the first character sequence
/// that is not a token.
///
/// # Example
/// ```
/// use ruleval::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("a >= 10").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("a".to_string()), 0),
///                 (Token::GreaterEqual, 2),
///                 (Token::Integer("10".to_string()), 5),]);
///
/// assert!(tokenize("a % 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span().start)),
            Err(()) => {
                return Err(ParseError::UnrecognizedInput { text:     lexer.slice().to_string(),
                                                           position: lexer.span().start, });
            },
        }
    }

    Ok(tokens)
}
