use crate::{
    error::ArithmeticError,
    interpreter::{
        evaluator::{binary::scalar::checked_float, core::EvalResult},
        value::core::{NumberValue, Operands},
    },
    util::num::{i64_to_f64, is_integral},
};

/// Evaluates an exponentiation `base ^ exponent`.
///
/// If either operand is a float the result is a float. For two integers the
/// result is an integer whenever the exact power is an integer that fits into
/// `i64`; otherwise it is computed in floating point.
///
/// # Errors
/// - [`ArithmeticError::DivideByZero`] for zero raised to a negative power.
/// - [`ArithmeticError::ComplexResult`] for a negative base with a fractional
///   exponent.
/// - [`ArithmeticError::Overflow`] if the float result leaves the finite
///   range.
///
/// # Example
/// ```
/// use calcline::{NumberValue, interpreter::evaluator::binary::power::eval_pow};
///
/// let result = eval_pow(NumberValue::Integer(2), NumberValue::Integer(10));
/// assert_eq!(result.unwrap(), NumberValue::Integer(1024));
///
/// let result = eval_pow(NumberValue::Integer(2), NumberValue::Integer(-1));
/// assert_eq!(result.unwrap(), NumberValue::Float(0.5));
/// ```
pub fn eval_pow(base: NumberValue, exponent: NumberValue) -> EvalResult<NumberValue> {
    match base.promote(exponent) {
        Operands::Integers(b, e) => integer_pow(b, e),
        Operands::Floats(b, e) => float_pow(b, e),
    }
}

fn integer_pow(base: i64, exponent: i64) -> EvalResult<NumberValue> {
    match (base, exponent) {
        (1, _) => Ok(NumberValue::Integer(1)),
        (-1, e) => Ok(NumberValue::Integer(if e % 2 == 0 { 1 } else { -1 })),
        (0, e) if e < 0 => Err(ArithmeticError::DivideByZero),
        (0, e) if e > 0 => Ok(NumberValue::Integer(0)),
        // |base| >= 2, so the exact result is a proper fraction.
        (b, e) if e < 0 => float_pow(i64_to_f64(b), i64_to_f64(e)),
        (b, e) => match u32::try_from(e).ok().and_then(|e| b.checked_pow(e)) {
            Some(result) => Ok(NumberValue::Integer(result)),
            None => float_pow(i64_to_f64(b), i64_to_f64(e)),
        },
    }
}

fn float_pow(base: f64, exponent: f64) -> EvalResult<NumberValue> {
    if base == 0.0 && exponent < 0.0 {
        return Err(ArithmeticError::DivideByZero);
    }
    if base < 0.0 && exponent.is_finite() && !is_integral(exponent) {
        return Err(ArithmeticError::ComplexResult);
    }
    checked_float(base.powf(exponent), base, exponent)
}
