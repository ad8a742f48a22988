mod common;
use common::*;

#[test]
fn test_call_and_return() {
    assert_eq!(
        exec(&[
            "10 GOSUB 40",
            "20 PRINT \"AFTER\"",
            "30 END",
            "40 PRINT \"SUB\"",
            "50 RETURN",
        ]),
        "SUB\nAFTER\n"
    );
}

#[test]
fn test_nested_calls() {
    assert_eq!(
        exec(&[
            "10 GOSUB 40",
            "20 PRINT \"TOP\"",
            "30 END",
            "40 GOSUB 70",
            "50 PRINT \"MID\"",
            "60 RETURN",
            "70 PRINT \"DEEP\"",
            "80 RETURN",
        ]),
        "DEEP\nMID\nTOP\n"
    );
}

#[test]
fn test_return_without_gosub() {
    assert_eq!(
        exec(&["10 RETURN"]),
        "STACK ERROR IN 10; RETURN WITHOUT GOSUB\n"
    );
}

#[test]
fn test_gosub_to_missing_line() {
    assert_eq!(exec(&["10 GOSUB 99"]), "NAME ERROR IN 10; UNDEFINED LINE\n");
}

#[test]
fn test_stack_overflow() {
    assert_eq!(
        exec(&["10 GOSUB 10"]),
        "STACK ERROR IN 10; TOO MANY NESTED GOSUB\n"
    );
}
