mod common;
use common::*;
use slate::mach::{Program, Runtime};
use std::io::Cursor;

#[test]
fn test_function_call() {
    let source = "DECLARE a\na := double(4)\nPRINTLN a\nRETURN\nFUNCTION double(x)\nRETURN x + x";
    assert_eq!(run(source), "8\n");
}

#[test]
fn test_call_in_expression() {
    let source = "DECLARE a, b\na := 1\nb := double(a) + double(a + 1)\nPRINTLN a, \" \", b\nRETURN\nFUNCTION double(x)\nRETURN x + x";
    assert_eq!(run(source), "1 6\n");
}

#[test]
fn test_recursion() {
    let source = "PRINTLN fact(5)\nRETURN\nFUNCTION fact(n)\nIF n < 2\nRETURN 1\nENDIF\nRETURN n * fact(n - 1)";
    assert_eq!(run(source), "120\n");
}

#[test]
fn test_two_parameter_recursion() {
    let source = "PRINTLN gcd(48, 18)\nRETURN\nFUNCTION gcd(a, b)\nIF b = 0\nRETURN a\nENDIF\nRETURN gcd(b, a % b)";
    assert_eq!(run(source), "6\n");
}

#[test]
fn test_procedure_call() {
    let source = "DECLARE x\nx := 3\nshow(x + 1)\nPRINTLN \"back\"\nRETURN\nPROCEDURE show(v)\nPRINTLN \"v = \", v\nRETURN";
    assert_eq!(run(source), "v = 4\nback\n");
}

#[test]
fn test_fallthrough_header_returns() {
    let source = "show()\nPRINTLN \"back\"\nRETURN\nPROCEDURE show()\nPRINT \"in\"\nFUNCTION unused(x)\nRETURN x";
    assert_eq!(run(source), "inback\n");
}

#[test]
fn test_procedure_cannot_return_value() {
    let source = "ping()\nRETURN\nPROCEDURE ping()\nRETURN 5";
    let (output, errors) = run_counting(source, "");
    assert_eq!(errors, 1);
    assert_eq!(output, "?RETURN MISMATCH IN 4; PROCEDURE CANNOT RETURN A VALUE\n");
}

#[test]
fn test_function_requires_return_value() {
    let source = "PRINTLN f()\nRETURN\nFUNCTION f()\nRETURN";
    let (output, errors) = run_counting(source, "");
    assert_eq!(errors, 1);
    assert_eq!(output, "0\n?RETURN MISMATCH IN 4; RETURN VALUE NOT FOUND\n");
}

#[test]
fn test_call_statement_needs_a_procedure() {
    let source = "f()\nRETURN\nFUNCTION f()\nRETURN 1";
    let (output, errors) = run_counting(source, "");
    assert_eq!(errors, 1);
    assert_eq!(output, "?TYPE MISMATCH IN 1; f IS NOT A PROCEDURE\n");
}

#[test]
fn test_undefined_call() {
    let (output, errors) = run_counting("nope(1)", "");
    assert_eq!(errors, 1);
    assert_eq!(output, "?UNDEFINED SYMBOL IN 1; nope PROCEDURE NOT FOUND\n");
}

#[test]
fn test_rand_builtin() {
    let source = "DECLARE r\nr := rand() % 10\nIF r < 0\nPRINTLN \"neg\"\nENDIF\nIF r > 9\nPRINTLN \"big\"\nENDIF\nPRINTLN \"ok\"";
    assert_eq!(run(source), "ok\n");
}

#[test]
fn test_rand_takes_no_arguments() {
    let (_, errors) = run_counting("PRINTLN rand(1)", "");
    assert_eq!(errors, 1);
}

#[test]
fn test_net_zero_stack_growth() {
    // after the run only the outermost return slot remains
    let source = "DECLARE a\na := double(2)\nRETURN\nFUNCTION double(x)\nRETURN x + x";
    let mut program = Program::new();
    program.load(Cursor::new(source.to_string())).unwrap();
    let mut out: Vec<u8> = Vec::new();
    let mut runtime = Runtime::new(program, Cursor::new(String::new()), &mut out);
    assert_eq!(runtime.run(), 0);
    assert_eq!(runtime.program().stack_size(), 1);
}

#[test]
fn test_runaway_recursion_is_detected() {
    let source = "PRINTLN down(0)\nRETURN\nFUNCTION down(n)\nRETURN down(n + 1)";
    let (_, errors) = run_counting(source, "");
    assert!(errors > 0);
}
