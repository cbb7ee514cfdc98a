use std::{iter::Peekable, ops::Range};

use log::trace;
use logos::{Logos, SpannedIter};

use crate::{ast::Operator, error::LexError, interpreter::value::core::NumberValue};

/// Represents a lexical token handed to the parser.
///
/// A token is either a numeric literal (with any leading sign already fused
/// into it), one of the five arithmetic operators, or a parenthesis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal, such as `42`, `-5` or `3.14`.
    Number(NumberValue),
    /// A binary arithmetic operator.
    Operator(Operator),
    /// `(`
    Open,
    /// `)`
    Close,
}

impl Token {
    /// Returns `true` if the token can end an operand.
    ///
    /// A `-` that follows such a token is a subtraction; anywhere else it is
    /// the sign of the next literal.
    #[must_use]
    pub const fn ends_operand(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Close)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Open => write!(f, "("),
            Self::Close => write!(f, ")"),
        }
    }
}

/// Raw lexemes recognised before sign fusion.
///
/// `-` is kept as its own lexeme here because whether it is an operator or a
/// sign depends on the token emitted before it.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// Unsigned literal with an integer part, such as `42`, `3.14` or `5.`.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    /// Unsigned literal without an integer part, such as `.5`. Only valid
    /// right after a sign.
    #[regex(r"\.[0-9]+")]
    Fraction,
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
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces. Tabs and line breaks are not part of the alphabet.
    #[regex(r" +", logos::skip)]
    Ignored,
}

type Lexemes<'s> = Peekable<SpannedIter<'s, Lexeme>>;

/// Converts a line of source text into a sequence of tokens.
///
/// Spaces are skipped. A `-` directly after a number or `)` becomes the
/// subtraction operator; anywhere else it must be immediately followed by a
/// number and is fused into that literal, so `-5` is a single
/// `Integer(-5)` token.
///
/// # Errors
/// - [`LexError::UnexpectedToken`] for a character outside the accepted
///   alphabet, or for a sign that is not directly followed by a number.
/// - [`LexError::LiteralTooLarge`] for an integer literal outside the `i64`
///   range.
///
/// # Example
/// ```
/// use calcline::{
///     NumberValue,
///     ast::Operator,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("-5 - 2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(NumberValue::Integer(-5)),
///                 Token::Operator(Operator::Sub),
///                 Token::Number(NumberValue::Integer(2))]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexemes = Lexeme::lexer(source).spanned().peekable();
    let mut tokens: Vec<Token> = Vec::new();

    while let Some((lexeme, span)) = lexemes.next() {
        let token = match lexeme {
            Ok(Lexeme::Number) => Token::Number(parse_literal(source, span)?),
            Ok(Lexeme::Minus) if tokens.last().is_some_and(Token::ends_operand) => {
                Token::Operator(Operator::Sub)
            },
            Ok(Lexeme::Minus) => Token::Number(fuse_sign(source, span, &mut lexemes)?),
            Ok(Lexeme::Plus) => Token::Operator(Operator::Add),
            Ok(Lexeme::Star) => Token::Operator(Operator::Mul),
            Ok(Lexeme::Slash) => Token::Operator(Operator::Div),
            Ok(Lexeme::Caret) => Token::Operator(Operator::Pow),
            Ok(Lexeme::LParen) => Token::Open,
            Ok(Lexeme::RParen) => Token::Close,
            Ok(Lexeme::Fraction | Lexeme::Ignored) | Err(()) => {
                return Err(unexpected_at(source, span.start));
            },
        };
        trace!("Lexed token {token}");
        tokens.push(token);
    }

    Ok(tokens)
}

/// Fuses a sign at `sign` with the literal that immediately follows it.
fn fuse_sign(source: &str,
             sign: Range<usize>,
             lexemes: &mut Lexemes<'_>)
             -> Result<NumberValue, LexError> {
    let end = match lexemes.peek() {
        Some((Ok(Lexeme::Number | Lexeme::Fraction), literal)) if literal.start == sign.end => {
            literal.end
        },
        _ => return Err(unexpected_at(source, sign.start)),
    };
    lexemes.next();

    parse_literal(source, sign.start..end)
}

/// Parses the literal text at `span`, tagging it `Float` if it contains a
/// decimal point.
fn parse_literal(source: &str, span: Range<usize>) -> Result<NumberValue, LexError> {
    let text = &source[span.clone()];

    if text.contains('.') {
        text.parse::<f64>()
            .map(NumberValue::from)
            .map_err(|_| unexpected_at(source, span.start))
    } else {
        text.parse::<i64>()
            .map(NumberValue::from)
            .map_err(|_| LexError::LiteralTooLarge(char_position(source, span.start)))
    }
}

fn unexpected_at(source: &str, offset: usize) -> LexError {
    let character = source[offset..].chars().next().unwrap_or_default();
    LexError::UnexpectedToken(character, char_position(source, offset))
}

/// Converts a byte offset into a zero-based character index.
fn char_position(source: &str, offset: usize) -> usize {
    source[..offset].chars().count()
}
