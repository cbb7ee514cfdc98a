/// Tagged numeric values and operand promotion.
///
/// Defines `NumberValue`, the integer-or-float result type shared by the
/// lexer (for literals), the parser (for leaves) and the evaluator, together
/// with the promotion rule that decides the tag of every computed result.
pub mod core;
