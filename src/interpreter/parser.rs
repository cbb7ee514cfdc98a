/// Parser entry points.
///
/// Contains [`core::parse`], which checks that the whole token sequence forms
/// one expression, the shared `ParseResult` alias, and the nesting and
/// height limits that keep the recursive descent within a bounded stack.
pub mod core;

/// Binary operator tiers.
///
/// One function per precedence tier (sum, product, power), each building a
/// left-leaning tree from the tier above it.
pub mod binary;

/// Operand parsing.
///
/// Parses the tightest-binding grammar rule: a number literal or a
/// parenthesised sub-expression.
pub mod factor;
