//! # calcline
//!
//! calcline evaluates a single line of arithmetic written with numbers, the
//! operators `+ - * / ^`, and parentheses. Results keep track of whether they
//! are integers or floats: `2+3*4` is `14`, while `4/2` is `2.0`.
//!
//! Evaluation runs in three stages, each usable on its own:
//! [`tokenize`] turns text into tokens, [`parse`] builds an expression tree,
//! and [`evaluate`] reduces the tree to a [`NumberValue`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expression` tree and the `Operator` enum. The
/// tree is built by the parser and consumed by the evaluator; it only ever
/// contains numbers and the five arithmetic operators.
pub mod ast;
/// Provides the error types for every stage of evaluation.
///
/// Each stage has its own enum (`LexError`, `ParseError`,
/// `ArithmeticError`), and `EvalError` wraps all three for callers of
/// [`evaluate_expression`].
pub mod error;
/// Implements the lexer, parser, evaluator and value types.
pub mod interpreter;
/// General numeric helpers.
pub mod util;

pub use crate::{
    error::{ArithmeticError, EvalError, LexError, ParseError},
    interpreter::{
        evaluator::core::evaluate, lexer::tokenize, parser::core::parse,
        value::core::NumberValue,
    },
};

/// Evaluates one line of arithmetic and returns its value.
///
/// The text is tokenized, parsed, and evaluated in turn. The first error
/// from any stage aborts the evaluation and is returned as is.
///
/// # Errors
/// Returns [`EvalError::Lex`], [`EvalError::Parse`] or
/// [`EvalError::Arithmetic`] depending on the stage that failed.
///
/// # Examples
/// ```
/// use calcline::{ArithmeticError, EvalError, NumberValue, evaluate_expression};
///
/// assert_eq!(evaluate_expression("2+3*4").unwrap(), NumberValue::Integer(14));
/// assert_eq!(evaluate_expression("4/2").unwrap(), NumberValue::Float(2.0));
///
/// let err = evaluate_expression("4/0").unwrap_err();
/// assert_eq!(err, EvalError::Arithmetic(ArithmeticError::DivideByZero));
/// ```
pub fn evaluate_expression(source: &str) -> Result<NumberValue, EvalError> {
    let tokens = tokenize(source)?;
    debug!("Lexed {} tokens from {source:?}", tokens.len());

    let expression = parse(&tokens)?;
    debug!("Parsed {expression} with {} operators", expression.operator_count());

    let value = evaluate(&expression)?;
    debug!("Evaluated {expression} to {value}");

    Ok(value)
}
