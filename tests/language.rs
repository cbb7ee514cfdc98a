use std::fs;

use calcline::{
    ArithmeticError, EvalError, LexError, NumberValue, ParseError, evaluate_expression,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (number, line) in content.lines().enumerate() {
            let Some((source, expected)) = parse_case(line) else {
                continue;
            };
            count += 1;

            match (evaluate_expression(source), expected) {
                (Ok(value), "error") => {
                    panic!("{path:?}:{}: '{source}' evaluated to {value} but was expected to fail",
                           number + 1)
                },
                (Ok(value), expected) => assert_eq!(value.to_string(),
                                                    expected,
                                                    "{path:?}:{}: '{source}'",
                                                    number + 1),
                (Err(_), "error") => {},
                (Err(e), expected) => {
                    panic!("{path:?}:{}: '{source}' failed with {e:?}, expected {expected}",
                           number + 1)
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Splits a case line of the form `expression => expected`. Blank lines and
/// `#` comments yield `None`.
fn parse_case(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (source, expected) = line.split_once("=>")?;
    Some((source.trim(), expected.trim()))
}

fn eval(src: &str) -> NumberValue {
    evaluate_expression(src).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
}

fn eval_err(src: &str) -> EvalError {
    match evaluate_expression(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(eval("2+3*4"), NumberValue::Integer(14));
    assert_eq!(eval("(2+3)*4"), NumberValue::Integer(20));
    assert_eq!(eval("10-3-2"), NumberValue::Integer(5));
    assert_eq!(eval("2^3^2"), NumberValue::Integer(64));
}

#[test]
fn literal_tags_are_preserved() {
    assert_eq!(eval("3"), NumberValue::Integer(3));
    assert_eq!(eval("3.0"), NumberValue::Float(3.0));
    assert_eq!(eval("-5+3"), NumberValue::Integer(-2));
}

#[test]
fn integer_only_sums_and_products_stay_integer() {
    let operands = [-7, -1, 0, 1, 2, 13, 100];
    let operators = ['+', '-', '*'];

    for a in operands {
        for b in operands {
            for op in operators {
                let source = format!("{a} {op} {b}");
                assert!(eval(&source).is_integer(), "'{source}' should be an integer");
            }
        }
    }
}

#[test]
fn any_division_yields_a_float() {
    assert_eq!(eval("4/2"), NumberValue::Float(2.0));
    assert!(eval("1 + 6/3").is_float());
    assert!(eval("(8/4)^2").is_float());
    assert!(eval("2 * (9/3) - 1").is_float());
}

#[test]
fn powers() {
    assert_eq!(eval("2^-1"), NumberValue::Float(0.5));
    assert!(eval("2^0.5").is_float());
    assert!((eval("2^0.5").as_f64() - std::f64::consts::SQRT_2).abs() < 1e-12);
    assert_eq!(eval("10^20"), NumberValue::Float(1e20));
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(eval_err("4/0"), EvalError::Arithmetic(ArithmeticError::DivideByZero));
    assert_eq!(eval_err("1/(2-2)"), EvalError::Arithmetic(ArithmeticError::DivideByZero));
}

#[test]
fn fractional_power_of_negative_is_error() {
    assert_eq!(eval_err("(-8)^0.5"), EvalError::Arithmetic(ArithmeticError::ComplexResult));
}

#[test]
fn integer_overflow_is_error() {
    assert_eq!(eval_err("9223372036854775807 + 1"),
               EvalError::Arithmetic(ArithmeticError::Overflow));
}

#[test]
fn unmatched_parenthesis_is_error() {
    assert_eq!(eval_err("(2+3"), EvalError::Parse(ParseError::UnmatchedParen));
}

#[test]
fn missing_operand_is_error() {
    assert_eq!(eval_err(""), EvalError::Parse(ParseError::UnexpectedEnd));
    assert_eq!(eval_err("2*"), EvalError::Parse(ParseError::UnexpectedEnd));
}

#[test]
fn trailing_tokens_are_error() {
    assert_eq!(eval_err("2 3"), EvalError::Parse(ParseError::TrailingTokens));
    assert_eq!(eval_err("(1+2))"), EvalError::Parse(ParseError::TrailingTokens));
}

#[test]
fn deeply_nested_input_is_error() {
    assert_eq!(eval_err(&"(".repeat(10_000)), EvalError::Parse(ParseError::TooDeep));
    assert_eq!(eval_err(&format!("{}1", "1+".repeat(10_000))),
               EvalError::Parse(ParseError::TooDeep));
    assert_eq!(eval(&format!("{}1", "1+".repeat(1_000))), NumberValue::Integer(1_001));
    assert_eq!(eval("1+1"), NumberValue::Integer(2));
}

#[test]
fn unknown_character_is_error() {
    assert_eq!(eval_err("2+$"), EvalError::Lex(LexError::UnexpectedToken('$', 2)));
    assert_eq!(eval_err("1\t+2"), EvalError::Lex(LexError::UnexpectedToken('\t', 1)));
    assert!(matches!(eval_err("sin(1)"), EvalError::Lex(LexError::UnexpectedToken('s', 0))));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(eval_err("4/0").to_string(), "Division by zero.");
    assert_eq!(eval_err("2+$").to_string(), "Unexpected token '$' at position 2.");
    assert_eq!(eval_err("(2").to_string(), "Expected closing parenthesis ')' but none found.");
    assert_eq!(eval_err(&"(".repeat(300)).to_string(), "Expression is nested too deeply.");
}

#[test]
fn separate_evaluations_share_no_state() {
    assert_eq!(eval("1+1"), NumberValue::Integer(2));
    assert_eq!(eval_err("1+"), EvalError::Parse(ParseError::UnexpectedEnd));
    assert_eq!(eval("1+1"), NumberValue::Integer(2));
}
