/// Operator dispatch.
pub mod core;

/// Addition, subtraction, multiplication and division.
pub mod scalar;

/// Exponentiation, including the exact-integer result rule.
pub mod power;
