use thiserror::Error;

/// Represents all errors that can occur while reducing an expression tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The divisor of `/`, or the base of a negative power, is zero.
    #[error("Division by zero.")]
    DivideByZero,
    /// The result does not fit into the result type.
    #[error("Numeric overflow while trying to compute result.")]
    Overflow,
    /// A negative base was raised to a fractional power.
    #[error("Complex result from negative base with fractional exponent.")]
    ComplexResult,
}
