use crate::{
    error::ArithmeticError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{NumberValue, Operands},
    },
};

/// Evaluates `+`, `-` or `*` after promoting the operands.
///
/// Two integers are combined with `integer_op`, which must return `None` on
/// overflow. Otherwise both operands are floats and `float_op` is used.
///
/// # Errors
/// Returns [`ArithmeticError::Overflow`] if the integer operation overflows or
/// the float operation leaves the finite range.
pub fn eval_arithmetic(left: NumberValue,
                       right: NumberValue,
                       integer_op: fn(i64, i64) -> Option<i64>,
                       float_op: fn(f64, f64) -> f64)
                       -> EvalResult<NumberValue> {
    match left.promote(right) {
        Operands::Integers(a, b) => integer_op(a, b).map(NumberValue::Integer)
                                                    .ok_or(ArithmeticError::Overflow),
        Operands::Floats(a, b) => checked_float(float_op(a, b), a, b),
    }
}

/// Evaluates `left / right`. The result is always a float.
///
/// # Errors
/// - [`ArithmeticError::DivideByZero`] if `right` is zero.
/// - [`ArithmeticError::Overflow`] if the quotient leaves the finite range.
pub fn eval_div(left: NumberValue, right: NumberValue) -> EvalResult<NumberValue> {
    if right.is_zero() {
        return Err(ArithmeticError::DivideByZero);
    }
    let (a, b) = (left.as_f64(), right.as_f64());
    checked_float(a / b, a, b)
}

/// Wraps a float result, rejecting a non-finite result of finite operands.
pub(crate) fn checked_float(result: f64, a: f64, b: f64) -> EvalResult<NumberValue> {
    if !result.is_finite() && a.is_finite() && b.is_finite() {
        return Err(ArithmeticError::Overflow);
    }
    Ok(NumberValue::Float(result))
}
