/// Binary operator evaluation logic.
///
/// Applies the five arithmetic operators to two already reduced values,
/// including the promotion rule that decides the tag of each result.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the post-order reduction of an expression tree and the
/// `EvalResult` alias.
pub mod core;
