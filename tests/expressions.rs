use summa::{evaluate, util::fmt::format_result, EvalError, ParseError, RuntimeError};

fn assert_result(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "Expression '{src}'"),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_parse_failure(src: &str, expected: &ParseError) {
    match evaluate(src) {
        Ok(value) => {
            panic!("Expression '{src}' succeeded with {value} but was expected to fail")
        },
        Err(EvalError::Parse(e)) => assert_eq!(&e, expected, "Expression '{src}'"),
        Err(e) => panic!("Expression '{src}' failed with the wrong error: {e}"),
    }
}

fn invalid_operand(token: &str) -> ParseError {
    ParseError::InvalidOperand { token: token.to_string() }
}

fn invalid_operator(token: &str) -> ParseError {
    ParseError::InvalidOperator { token: token.to_string() }
}

#[test]
fn single_operand_expressions() {
    assert_result("42", 42.0);
    assert_result("3.25", 3.25);
    assert_result(".5", 0.5);
    assert_result("7.", 7.0);
}

#[test]
fn single_symbol_chains_fold_left_to_right() {
    assert_result("10 - 3 - 2", 5.0);
    assert_result("100 / 10 / 2", 5.0);
    assert_result("1 + 2 + 3 + 4", 10.0);
    assert_result("2 * 3 * 4", 24.0);
}

#[test]
fn multiplication_and_division_bind_tighter() {
    assert_result("2 + 3 * 4", 14.0);
    assert_result("2 * 3 + 4", 10.0);
    assert_result("2 + 10 / 2", 7.0);
    assert_result("10 - 2 * 3", 4.0);
}

#[test]
fn same_tier_symbols_fold_in_table_order() {
    // Each symbol gets its own pass over the operator list, so all
    // multiplications fold before any division, and all additions before
    // any subtraction.
    assert_result("12 / 4 * 3", 1.0);
    assert_result("10 - 4 + 2", 4.0);
}

#[test]
fn whitespace_runs_collapse() {
    assert_result("  2    +  2 ", 4.0);
    assert_result("\t1 +\t1", 2.0);
}

#[test]
fn division_by_zero_fails() {
    for src in ["5 / 0", "1 / 0.0", "3 + 4 / 0"] {
        match evaluate(src) {
            Ok(value) => {
                panic!("Expression '{src}' succeeded with {value} but was expected to fail")
            },
            Err(EvalError::Runtime(e)) => assert_eq!(e, RuntimeError::DivisionByZero),
            Err(e) => panic!("Expression '{src}' failed with the wrong error: {e}"),
        }
    }
}

#[test]
fn invalid_operands_are_rejected_with_the_token() {
    assert_parse_failure("3 .. 4 + 5", &invalid_operand(".."));
    assert_parse_failure("x + 1", &invalid_operand("x"));
    assert_parse_failure("1e5 + 1", &invalid_operand("1e5"));
    assert_parse_failure("+ 3", &invalid_operand("+"));
}

#[test]
fn invalid_operators_are_rejected_with_the_token() {
    assert_parse_failure("3 ** 4", &invalid_operator("**"));
    assert_parse_failure("3 % 4", &invalid_operator("%"));
    assert_parse_failure("3 4", &invalid_operator("4"));
}

#[test]
fn incomplete_expressions_are_rejected() {
    assert_parse_failure("3 +", &ParseError::MissingFinalOperand);
    assert_parse_failure("", &ParseError::MissingFinalOperand);
    assert_parse_failure("   ", &ParseError::MissingFinalOperand);
}

#[test]
fn bare_dot_operand_is_accepted_as_zero() {
    // A lone "." satisfies the operand rule (no non-digit characters other
    // than ".", at most one "."). It parses as zero.
    assert_result(".", 0.0);
    assert_result(". + 1", 1.0);
}

#[test]
fn leading_unary_minus_is_not_supported() {
    // Negative numbers cannot be entered directly; "-2" is rejected as an
    // operand, not folded as a sign.
    assert_parse_failure("-2 + 1", &invalid_operand("-2"));
}

#[test]
fn whole_results_format_without_a_fractional_part() {
    assert_eq!(format_result(evaluate("4 / 2").unwrap()), "2");
    assert_eq!(format_result(evaluate("2 - 2").unwrap()), "0");
    assert_eq!(format_result(100.0), "100");
}

#[test]
fn fractional_results_format_rounded_and_trimmed() {
    assert_eq!(format_result(evaluate("1 / 3").unwrap()), "0.3333333333");
    assert_eq!(format_result(4.5), "4.5");
    assert_eq!(format_result(evaluate("0.1 + 0.2").unwrap()), "0.3");
    assert_eq!(format_result(evaluate("1 - 3").unwrap()), "-2");
}

#[test]
fn formatted_results_tokenize_as_operands() {
    for src in ["22 / 7", "4 / 2", "0.125 * 8"] {
        let rendered = format_result(evaluate(src).unwrap());

        if let Err(e) = evaluate(&rendered) {
            panic!("Formatted result '{rendered}' of '{src}' was rejected: {e}");
        }
    }
}
