use log::trace;

use crate::{
    ast::Expression,
    error::ArithmeticError,
    interpreter::{evaluator::binary::core::eval_binary, value::core::NumberValue},
};

/// Result of an evaluation step.
pub type EvalResult<T> = Result<T, ArithmeticError>;

/// Reduces an expression tree to a single value.
///
/// The reduction is post-order: both operands of a `Binary` node are reduced
/// first, then its operator is applied to the two results. A `Leaf` evaluates
/// to its own value.
///
/// # Errors
/// Returns the first [`ArithmeticError`] raised anywhere in the tree.
///
/// # Example
/// ```
/// use calcline::{
///     NumberValue,
///     ast::{Expression, Operator},
///     interpreter::evaluator::core::evaluate,
/// };
///
/// let tree = Expression::binary(Expression::Leaf(NumberValue::Integer(7)),
///                               Operator::Sub,
///                               Expression::Leaf(NumberValue::Float(0.5)));
/// assert_eq!(evaluate(&tree).unwrap(), NumberValue::Float(6.5));
/// ```
pub fn evaluate(expr: &Expression) -> EvalResult<NumberValue> {
    match expr {
        Expression::Leaf(value) => Ok(*value),
        Expression::Binary { left, op, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            let result = eval_binary(*op, left, right)?;
            trace!("Reduced {left} {op} {right} to {result}");
            Ok(result)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Operator;

    fn leaf(n: i64) -> Expression {
        Expression::Leaf(NumberValue::Integer(n))
    }

    #[test]
    fn leaf_evaluates_to_itself() {
        assert_eq!(evaluate(&leaf(3)).unwrap(), NumberValue::Integer(3));
        let float = Expression::Leaf(NumberValue::Float(3.0));
        assert_eq!(evaluate(&float).unwrap(), NumberValue::Float(3.0));
    }

    #[test]
    fn nested_tree_is_reduced_bottom_up() {
        // (2 + 3) * (10 - 4)
        let tree = Expression::binary(Expression::binary(leaf(2), Operator::Add, leaf(3)),
                                      Operator::Mul,
                                      Expression::binary(leaf(10), Operator::Sub, leaf(4)));
        assert_eq!(evaluate(&tree).unwrap(), NumberValue::Integer(30));
    }

    #[test]
    fn error_in_a_subtree_aborts_the_reduction() {
        let tree = Expression::binary(leaf(1),
                                      Operator::Add,
                                      Expression::binary(leaf(4), Operator::Div, leaf(0)));
        assert_eq!(evaluate(&tree), Err(ArithmeticError::DivideByZero));
    }
}
