use crate::interpreter::value::core::NumberValue;

/// A binary arithmetic operator that can appear inside an [`Expression`].
///
/// Parentheses are not operators here: they only exist as punctuation tokens
/// and are resolved by the parser into the shape of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl Operator {
    /// Returns the source symbol of the operator.
    ///
    /// # Example
    /// ```
    /// use calcline::ast::Operator;
    ///
    /// assert_eq!(Operator::Pow.symbol(), '^');
    /// ```
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An expression tree produced by the parser.
///
/// Every `Binary` node exclusively owns both of its operands. The tree is
/// built once per evaluation request and dropped after it has been reduced.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A numeric literal.
    Leaf(NumberValue),
    /// An operator applied to two operands, `left op right`.
    Binary {
        /// Left-hand operand.
        left:  Box<Self>,
        /// The operator.
        op:    Operator,
        /// Right-hand operand.
        right: Box<Self>,
    },
}

impl Expression {
    /// Builds a `Binary` node, boxing both operands.
    ///
    /// # Example
    /// ```
    /// use calcline::{
    ///     NumberValue,
    ///     ast::{Expression, Operator},
    /// };
    ///
    /// let sum = Expression::binary(Expression::Leaf(NumberValue::Integer(1)),
    ///                              Operator::Add,
    ///                              Expression::Leaf(NumberValue::Integer(2)));
    /// assert_eq!(sum.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: Operator, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       right: Box::new(right) }
    }

    /// Returns the number of operator nodes in the tree.
    #[must_use]
    pub fn operator_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Binary { left, right, .. } => 1 + left.operator_count() + right.operator_count(),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leaf(value) => write!(f, "{value}"),
            Self::Binary { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
