use std::iter::Peekable;

use crate::{
    ast::Operator,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Subtree},
            factor::parse_factor,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `sum := product (("+" | "-") product)*`
pub(crate) fn parse_sum<'a, I>(tokens: &mut Peekable<I>,
                               nesting: usize)
                               -> ParseResult<Subtree>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_product(tokens, nesting)?;
    while let Some(op) = next_operator(tokens, &[Operator::Add, Operator::Sub]) {
        let right = parse_product(tokens, nesting)?;
        left = left.join(op, right)?;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `product := power (("*" | "/") power)*`
pub(crate) fn parse_product<'a, I>(tokens: &mut Peekable<I>,
                                   nesting: usize)
                                   -> ParseResult<Subtree>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_power(tokens, nesting)?;
    while let Some(op) = next_operator(tokens, &[Operator::Mul, Operator::Div]) {
        let right = parse_power(tokens, nesting)?;
        left = left.join(op, right)?;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation chains group from the left like every other tier:
/// `a ^ b ^ c` parses as `(a ^ b) ^ c`.
///
/// The rule is: `power := factor ("^" factor)*`
pub(crate) fn parse_power<'a, I>(tokens: &mut Peekable<I>,
                                 nesting: usize)
                                 -> ParseResult<Subtree>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_factor(tokens, nesting)?;
    while let Some(op) = next_operator(tokens, &[Operator::Pow]) {
        let right = parse_factor(tokens, nesting)?;
        left = left.join(op, right)?;
    }
    Ok(left)
}

/// Consumes the next token if it is one of `accepted` operators.
///
/// Any other token is left in the stream for a lower tier or the caller.
fn next_operator<'a, I>(tokens: &mut Peekable<I>, accepted: &[Operator]) -> Option<Operator>
    where I: Iterator<Item = &'a Token>
{
    let op = tokens.peek()
                   .and_then(|token| token_to_operator(token))
                   .filter(|op| accepted.contains(op))?;
    tokens.next();
    Some(op)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for numbers and parentheses.
///
/// # Example
/// ```
/// use calcline::{
///     ast::Operator,
///     interpreter::{lexer::Token, parser::binary::token_to_operator},
/// };
///
/// assert_eq!(token_to_operator(&Token::Operator(Operator::Add)),
///            Some(Operator::Add));
/// assert_eq!(token_to_operator(&Token::Open), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Operator(op) => Some(*op),
        Token::Number(_) | Token::Open | Token::Close => None,
    }
}
