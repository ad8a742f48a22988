mod common;
use common::*;
use minibasic::lang::ErrorCode;
use minibasic::mach::Runtime;

#[test]
fn test_errors_carry_line_numbers() {
    assert_eq!(exec(&["10 GOTO 99"]), "NAME ERROR IN 10; UNDEFINED LINE\n");
    assert_eq!(
        exec(&["10 PRINT 1", "20 PRINT 1/0"]),
        "1\nILLEGAL QUANTITY IN 20; DIVISION BY ZERO\n"
    );
}

#[test]
fn test_type_mismatch() {
    assert_eq!(exec(&["10 X = \"A\" * 2"]), "TYPE MISMATCH IN 10\n");
    assert_eq!(
        exec(&["10 PRINT \"A\" < \"B\""]),
        "TYPE MISMATCH IN 10; INVALID STRING OPERATION\n"
    );
}

#[test]
fn test_run_stops_at_first_error() {
    assert_eq!(
        exec(&["10 PRINT 1", "20 PRINT X", "30 PRINT 3"]),
        "1\nNAME ERROR IN 20; UNDEFINED VARIABLE\n"
    );
}

#[test]
fn test_unterminated_string_surfaces_at_run() {
    assert_eq!(
        exec(&["10 PRINT \"OOPS"]),
        "LEX ERROR IN 10; UNTERMINATED STRING: OOPS\n"
    );
}

#[test]
fn test_line_overflow_keeps_its_own_message() {
    let mut runtime = Runtime::new();
    runtime
        .load_line(10, &format!(" PRINT {}", "1".repeat(520)))
        .unwrap();
    let mut console = TestConsole::new();
    let error = runtime.run(&mut console).unwrap_err();
    assert_eq!(
        error.to_string(),
        "LEX ERROR IN 10; LINE EXCEEDS 512 CHARACTERS"
    );
}

#[test]
fn test_error_codes_survive_display() {
    let mut runtime = Runtime::new();
    load(&mut runtime, &["10 GOTO 99"]);
    let mut console = TestConsole::new();
    let error = runtime.run(&mut console).unwrap_err();
    assert_eq!(error.code(), ErrorCode::NameError);
    assert_eq!(error.line_number(), Some(10));
    assert!(!error.is_direct());
}

#[test]
fn test_empty_program_runs_clean() {
    let mut runtime = Runtime::new();
    let mut console = TestConsole::new();
    runtime.run(&mut console).unwrap();
    assert_eq!(console.output, "");
}
