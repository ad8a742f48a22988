use super::{code, eval, number, text};
use crate::lang::ErrorCode;
use crate::mach::{Val, Var};

#[test]
fn test_precedence() {
    assert_eq!(number("2+3*4"), 14.0);
    assert_eq!(number("(2+3)*4"), 20.0);
    assert_eq!(number("10-4-3"), 3.0);
    // The rightmost split makes every binary operator left-associative.
    assert_eq!(number("2^3^2"), 64.0);
    assert_eq!(number("1+2=3 AND 2*2=4"), 1.0);
}

#[test]
fn test_unary() {
    assert_eq!(number("-5"), -5.0);
    assert_eq!(number("+5"), 5.0);
    assert_eq!(number("-2^2"), -4.0);
    assert_eq!(number("NOT 0"), 1.0);
    assert_eq!(number("NOT 7"), 0.0);
    // A leading NOT takes the whole remainder; parenthesize to bind it
    // to a single operand.
    assert_eq!(number("NOT 1 OR 1"), 0.0);
    assert_eq!(number("(NOT 1) OR 1"), 1.0);
    assert_eq!(number("1 OR NOT 1"), 1.0);
}

#[test]
fn test_arithmetic() {
    assert_eq!(number("7/2"), 3.5);
    assert_eq!(number("10 MOD 3"), 1.0);
    assert_eq!(number("((5))"), 5.0);
}

#[test]
fn test_comparisons_tolerate_roundoff() {
    assert_eq!(number("0.1+0.2=0.3"), 1.0);
    assert_eq!(number("0.1+0.2<>0.3"), 0.0);
    assert_eq!(number("1<2"), 1.0);
    assert_eq!(number("2<=1"), 0.0);
    assert_eq!(number("3>=3"), 1.0);
}

#[test]
fn test_logic_is_boolean() {
    assert_eq!(number("5 AND 3"), 1.0);
    assert_eq!(number("5 AND 0"), 0.0);
    assert_eq!(number("0 OR 2"), 1.0);
    assert_eq!(number("0 OR 0"), 0.0);
}

#[test]
fn test_strings() {
    assert_eq!(text("\"AB\"+\"CD\""), "ABCD");
    assert_eq!(number("\"A\"=\"A\""), 1.0);
    assert_eq!(number("\"A\"<>\"B\""), 1.0);
    assert_eq!(code("\"A\"<\"B\""), ErrorCode::TypeError);
    assert_eq!(code("\"A\"+1"), ErrorCode::TypeError);
    assert_eq!(code("-\"A\""), ErrorCode::TypeError);
}

#[test]
fn test_range_faults() {
    assert_eq!(code("1/0"), ErrorCode::RangeError);
    assert_eq!(code("5 MOD 0"), ErrorCode::RangeError);
    assert_eq!(code("0^(0-1)"), ErrorCode::RangeError);
    assert_eq!(code("SQR(-1)"), ErrorCode::RangeError);
    assert_eq!(code("CHR$(300)"), ErrorCode::RangeError);
    assert_eq!(code("ASC(\"\")"), ErrorCode::RangeError);
}

#[test]
fn test_undefined_variable() {
    assert_eq!(code("X"), ErrorCode::NameError);
    assert_eq!(code("X+1"), ErrorCode::NameError);
}

#[test]
fn test_defined_variable() {
    let mut vars = Var::new();
    vars.store("X", Val::Number(4.0)).unwrap();
    assert_eq!(eval(&vars, "X*X").unwrap(), Val::Number(16.0));
}

#[test]
fn test_functions() {
    assert_eq!(number("ABS(-3)"), 3.0);
    assert_eq!(number("INT(2.7)"), 2.0);
    assert_eq!(number("INT(-2.5)"), -3.0);
    assert_eq!(number("SQR(9)"), 3.0);
    assert_eq!(number("LEN(\"ABC\")"), 3.0);
    assert_eq!(number("VAL(\"1.2.3\")"), 1.2);
    assert_eq!(number("VAL(\"X\")"), 0.0);
    assert_eq!(number("ASC(\"A\")"), 65.0);
    assert_eq!(text("STR$(3.14)"), "3.14");
    assert_eq!(text("CHR$(65)"), "A");
}

#[test]
fn test_call_composes_with_operators() {
    let got = number("SIN(1)+2");
    assert!((got - (1f64.sin() + 2.0)).abs() < 1e-12);
    assert_eq!(number("ABS(-3)*2"), 6.0);
    assert_eq!(number("1+LEN(\"AB\")"), 3.0);
}

#[test]
fn test_function_arity_and_types() {
    assert_eq!(code("ABS(\"A\")"), ErrorCode::TypeError);
    assert_eq!(code("ABS(1,2)"), ErrorCode::TypeError);
    assert_eq!(code("LEN(1)"), ErrorCode::TypeError);
    assert_eq!(code("ABS"), ErrorCode::SyntaxError);
}

#[test]
fn test_unimplemented_functions() {
    assert_eq!(code("LEFT$(\"AB\",1)"), ErrorCode::Unsupported);
    assert_eq!(code("MID$(\"ABC\",2,1)"), ErrorCode::Unsupported);
}

#[test]
fn test_rnd_ranges() {
    for _ in 0..10 {
        let n = number("RND");
        assert!((0.0..1.0).contains(&n));
        let n = number("RND(10)");
        assert!((0.0..10.0).contains(&n));
    }
}

#[test]
fn test_malformed_expressions() {
    assert_eq!(code("1+"), ErrorCode::SyntaxError);
    // The split picks the lone minus, leaving a dangling caret.
    assert_eq!(code("0^-1"), ErrorCode::SyntaxError);
    assert_eq!(code("(1"), ErrorCode::SyntaxError);
    assert_eq!(code("\"ABC"), ErrorCode::LexError);
}
