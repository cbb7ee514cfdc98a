/// The evaluator module reduces expression trees to values.
///
/// The evaluator walks the tree post-order, applying each operator to the
/// already reduced values of its operands, and reports arithmetic failures
/// such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes a line of source text.
///
/// The lexer reads the raw text and produces numbers, operators and
/// parentheses. It also decides whether each `-` is a subtraction or the
/// sign of a literal.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// A recursive descent parser with one function per precedence tier. It
/// rejects missing operands, unclosed parentheses and leftover tokens.
pub mod parser;
/// The value module defines the numeric result type.
///
/// Declares `NumberValue`, the integer-or-float tagged value, and the
/// promotion rule applied before every arithmetic operation.
pub mod value;
