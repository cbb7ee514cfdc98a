use thiserror::Error;

/// Represents all grammar violations found while building the expression
/// tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// An operand was required, but the input ended or the next token can
    /// not start an operand.
    #[error("Unexpected end of expression: expected a number or '('.")]
    UnexpectedEnd,
    /// An opening parenthesis `(` was never closed.
    #[error("Expected closing parenthesis ')' but none found.")]
    UnmatchedParen,
    /// Tokens remain after a complete expression was parsed.
    #[error("Extra tokens after expression.")]
    TrailingTokens,
    /// Parentheses nest deeper than
    /// [`MAX_NESTING`](crate::interpreter::parser::core::MAX_NESTING), or the
    /// tree would be taller than
    /// [`MAX_HEIGHT`](crate::interpreter::parser::core::MAX_HEIGHT).
    #[error("Expression is nested too deeply.")]
    TooDeep,
}
