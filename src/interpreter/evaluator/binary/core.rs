use crate::{
    ast::Operator,
    interpreter::{
        evaluator::{
            binary::{
                power::eval_pow,
                scalar::{eval_arithmetic, eval_div},
            },
            core::EvalResult,
        },
        value::core::NumberValue,
    },
};

/// Applies a binary operator to two values, `left op right`.
///
/// `+`, `-` and `*` keep two integers as an integer and produce a float as
/// soon as either side is a float. `/` always produces a float. `^` produces
/// an integer only for two integer operands whose exact result is an integer.
///
/// # Example
/// ```
/// use calcline::{
///     NumberValue,
///     ast::Operator,
///     interpreter::evaluator::binary::core::eval_binary,
/// };
///
/// let result = eval_binary(Operator::Div, NumberValue::Integer(4), NumberValue::Integer(2));
/// assert_eq!(result.unwrap(), NumberValue::Float(2.0));
/// ```
pub fn eval_binary(op: Operator, left: NumberValue, right: NumberValue) -> EvalResult<NumberValue> {
    match op {
        Operator::Add => eval_arithmetic(left, right, i64::checked_add, |a, b| a + b),
        Operator::Sub => eval_arithmetic(left, right, i64::checked_sub, |a, b| a - b),
        Operator::Mul => eval_arithmetic(left, right, i64::checked_mul, |a, b| a * b),
        Operator::Div => eval_div(left, right),
        Operator::Pow => eval_pow(left, right),
    }
}
