use std::rc::Rc;

/// Represents a literal value in a script.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code: numbers, booleans, strings, and `nil`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A double-quoted string literal, without its quotes.
    Str(Rc<str>),
    /// The `nil` literal.
    Nil,
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Scripts are built from literals, variable and constant references, array
/// literals, builtin calls, and numeric negation. There are no operators
/// beyond unary minus.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean, or nil).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable or constant by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Arithmetic negation of a numeric expression (e.g. `-x`).
    Negate {
        /// The operand.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A call to a builtin function.
    FunctionCall {
        /// Name of the function.
        name: String,
        /// Arguments passed to the function.
        args: Vec<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Array literal expression.
    ArrayLiteral {
        /// The elements of the array.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
}

impl Expr {
    /// Returns the source line number where this expression appears.
    ///
    /// # Example
    /// ```
    /// use numlib::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::Negate { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::ArrayLiteral { line, .. } => *line,
        }
    }
}

/// Represents a top-level statement.
///
/// Statements are the units parsed from input lines.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `let name = expr` binding.
    Let {
        /// The bound name.
        name:  String,
        /// The expression whose value is bound.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}
