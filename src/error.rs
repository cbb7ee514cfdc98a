use thiserror::Error;

/// Lexing errors.
///
/// Raised while scanning the source line: unknown characters, dangling signs
/// and integer literals that do not fit into 64 bits.
pub mod lex_error;
/// Parsing errors.
///
/// Grammar violations detected while building the expression tree, such as a
/// missing operand or an unclosed parenthesis.
pub mod parse_error;
/// Arithmetic errors.
///
/// Raised during evaluation: division by zero, overflow, and powers without a
/// real result.
pub mod arithmetic_error;

pub use arithmetic_error::ArithmeticError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any error produced by [`crate::evaluate_expression`].
///
/// Each stage of the pipeline reports its own error type; this enum wraps
/// them so callers can handle a single `Result`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression could not be evaluated.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
