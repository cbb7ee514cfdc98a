use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING, ParseResult, Subtree, parse_expression},
    },
};

/// Parses an operand: a number literal or a parenthesised expression.
///
/// Grammar:
/// ```text
///     factor := number
///             | "(" sum ")"
/// ```
///
/// # Errors
/// - [`ParseError::UnexpectedEnd`] if the input is exhausted or the next
///   token is an operator or `)`.
/// - [`ParseError::TooDeep`] if a `(` would nest deeper than [`MAX_NESTING`].
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>,
                                  nesting: usize)
                                  -> ParseResult<Subtree>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Number(value)) => Ok(Subtree::leaf(*value)),
        Some(Token::Open) => parse_grouping(tokens, nesting + 1),
        Some(Token::Operator(_) | Token::Close) | None => Err(ParseError::UnexpectedEnd),
    }
}

/// Parses the inside of `( ... )`, after the opening parenthesis has been
/// consumed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         nesting: usize)
                         -> ParseResult<Subtree>
    where I: Iterator<Item = &'a Token>
{
    if nesting > MAX_NESTING {
        return Err(ParseError::TooDeep);
    }

    let inner = parse_expression(tokens, nesting)?;
    match tokens.next() {
        Some(Token::Close) => Ok(inner),
        _ => Err(ParseError::UnmatchedParen),
    }
}
