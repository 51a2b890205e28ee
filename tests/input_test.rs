mod common;
use common::*;

#[test]
fn test_input_with_prompt() {
    let source = "DECLARE x\nINPUT \"Give x\", x\nPRINTLN x * 2";
    let (output, errors) = run_counting(source, "21\n");
    assert_eq!(output, "Give x\n42\n");
    assert_eq!(errors, 0);
}

#[test]
fn test_input_multiple_values() {
    let source = "DECLARE a, b\nINPUT a, b\nPRINTLN a + b";
    assert_eq!(run_with_input(source, "3\n4\n"), "7\n");
}

#[test]
fn test_input_trims_blanks() {
    let source = "DECLARE x\nINPUT x\nPRINTLN x";
    assert_eq!(run_with_input(source, "  12  \n"), "12\n");
}

#[test]
fn test_input_negative_value() {
    let source = "DECLARE x\nINPUT x\nPRINTLN x - 1";
    assert_eq!(run_with_input(source, "-4\n"), "-5\n");
}

#[test]
fn test_input_unknown_variable() {
    let (output, errors) = run_counting("INPUT x", "5\n");
    assert_eq!(errors, 1);
    assert_eq!(output, "?UNDEFINED SYMBOL IN 1; x NOT FOUND\n");
}

#[test]
fn test_input_past_end() {
    let source = "DECLARE x\nINPUT x";
    let (output, errors) = run_counting(source, "");
    assert_eq!(errors, 1);
    assert_eq!(output, "?END OF INPUT IN 2\n");
}

#[test]
fn test_input_rejects_text() {
    let source = "DECLARE x\nINPUT x\nPRINTLN x";
    let (output, errors) = run_counting(source, "banana\n");
    assert_eq!(errors, 1);
    assert_eq!(output, "?SYNTAX ERROR IN 2; banana IS NOT A NUMBER\n");
}
