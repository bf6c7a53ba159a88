/// Represents a literal as it appeared in the source text.
///
/// Literals keep their raw text. Numeric text is converted when the literal is
/// evaluated, so a malformed number (for example an integer that does not fit
/// in 64 bits) is reported as a runtime error rather than a parse error. The
/// raw text is also what function calls receive for literal arguments when
/// [`LiteralArguments::Raw`](crate::interpreter::evaluator::core::LiteralArguments)
/// is in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// A double-quoted or back-quoted string, quotes included.
    String(String),
    /// An integer literal such as `42` or `0x2A`.
    Integer(String),
    /// A floating-point literal such as `2.5` or `1e9`.
    Real(String),
    /// An imaginary literal such as `2i`. Accepted by the grammar, never
    /// convertible to a value.
    Imaginary(String),
    /// A character literal such as `'a'`. Accepted by the grammar, never
    /// convertible to a value.
    Char(String),
}

impl LiteralValue {
    /// Returns the literal's source text.
    ///
    /// # Example
    /// ```
    /// use ruleval::ast::LiteralValue;
    ///
    /// let lit = LiteralValue::String("\"abc\"".to_string());
    /// assert_eq!(lit.raw(), "\"abc\"");
    /// ```
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::String(s)
            | Self::Integer(s)
            | Self::Real(s)
            | Self::Imaginary(s)
            | Self::Char(s) => s,
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// The set of variants is closed. Each node owns its children and records the
/// byte offset of the token that introduced it, which is used for error
/// reporting. Nodes are never modified after parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (string or number).
    Literal {
        /// The literal as written.
        value:    LiteralValue,
        /// Byte offset in the source text.
        position: usize,
    },
    /// Reference to a context entry, or one of the boolean names `true` and
    /// `false`.
    Identifier {
        /// Name of the identifier.
        name:     String,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source text.
        position: usize,
    },
    /// An expression wrapped in parentheses.
    Grouping {
        /// The enclosed expression.
        expr:     Box<Self>,
        /// Byte offset of `(` in the source text.
        position: usize,
    },
    /// Index expression (e.g. `items[2]` or `attrs["color"]`).
    Index {
        /// The container being indexed.
        target:   Box<Self>,
        /// The index or key.
        index:    Box<Self>,
        /// Byte offset of `[` in the source text.
        position: usize,
    },
    /// Member access (e.g. `user.name`).
    Member {
        /// The map being accessed.
        target:   Box<Self>,
        /// The member name.
        name:     String,
        /// Byte offset of `.` in the source text.
        position: usize,
    },
    /// Function call expression (e.g. `contains(tags, "x")`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Byte offset in the source text.
        position:  usize,
    },
}

impl Expr {
    /// Gets the source offset from `self`.
    /// ## Example
    /// ```
    /// use ruleval::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name:     "x".to_string(),
    ///                               position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::Identifier { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Grouping { position, .. }
            | Self::Index { position, .. }
            | Self::Member { position, .. }
            | Self::Call { position, .. } => *position,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and logical connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
    /// Unary plus (e.g. `+x`). Parsed, but has no evaluation rule.
    Plus,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
            Self::Plus => "+",
        };
        write!(f, "{operator}")
    }
}

/// Renders the expression back to source form.
///
/// Binary operations are wrapped in parentheses so the output shows how the
/// input was grouped.
///
/// # Example
/// ```
/// use ruleval::Expression;
///
/// let expr = Expression::parse("a + b * 2 > 10").unwrap();
/// assert_eq!(expr.root().to_string(), "((a + (b * 2)) > 10)");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{}", value.raw()),
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "{op}{expr}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::Grouping { expr, .. } => write!(f, "({expr})"),
            Self::Index { target, index, .. } => write!(f, "{target}[{index}]"),
            Self::Member { target, name, .. } => write!(f, "{target}.{name}"),
            Self::Call { name, arguments, .. } => {
                write!(f, "{name}(")?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
        }
    }
}
