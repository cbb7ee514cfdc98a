use std::iter::Peekable;

use log::debug;

use crate::{
    ast::{Expression, Operator},
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_sum, value::core::NumberValue},
};

/// Result of a parsing step.
pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting accepted by the parser.
pub const MAX_NESTING: usize = 256;

/// Tallest tree the parser builds, counted in operator levels.
///
/// A flat chain such as `1+1+...+1` is as tall as it has operators.
pub const MAX_HEIGHT: usize = 1024;

/// A parsed subtree together with its height.
#[derive(Debug)]
pub(crate) struct Subtree {
    pub(crate) tree:   Expression,
    pub(crate) height: usize,
}

impl Subtree {
    pub(crate) const fn leaf(value: NumberValue) -> Self {
        Self { tree:   Expression::Leaf(value),
               height: 0, }
    }

    /// Joins `self` and `right` under `op`.
    ///
    /// # Errors
    /// Returns [`ParseError::TooDeep`] if the joined tree would be taller
    /// than [`MAX_HEIGHT`].
    pub(crate) fn join(self, op: Operator, right: Self) -> ParseResult<Self> {
        let height = self.height.max(right.height) + 1;
        if height > MAX_HEIGHT {
            return Err(ParseError::TooDeep);
        }

        Ok(Self { tree: Expression::binary(self.tree, op, right.tree),
                  height })
    }
}

/// Parses a complete token sequence into an expression tree.
///
/// The whole sequence must form exactly one expression.
///
/// # Errors
/// - [`ParseError::UnexpectedEnd`] if an operand is missing.
/// - [`ParseError::UnmatchedParen`] if a `(` is never closed.
/// - [`ParseError::TrailingTokens`] if tokens remain after the expression.
/// - [`ParseError::TooDeep`] if the input nests deeper than [`MAX_NESTING`]
///   or would build a tree taller than [`MAX_HEIGHT`].
///
/// # Example
/// ```
/// use calcline::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("2+3*4").unwrap();
/// let tree = parse(&tokens).unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expression> {
    let mut iter = tokens.iter().peekable();
    let expression = parse_expression(&mut iter, 0)?.tree;

    if let Some(token) = iter.peek() {
        debug!("Unconsumed token {token} after {expression}");
        return Err(ParseError::TrailingTokens);
    }

    Ok(expression)
}

/// Parses a full expression.
///
/// Begins at the lowest-precedence tier and recursively descends through the
/// hierarchy. Stops at the first token that cannot continue the expression
/// and leaves it in the stream.
///
/// `nesting` is the number of parentheses enclosing this expression.
///
/// Grammar: `expression := sum`
pub(crate) fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                                      nesting: usize)
                                      -> ParseResult<Subtree>
    where I: Iterator<Item = &'a Token>
{
    parse_sum(tokens, nesting)
}
