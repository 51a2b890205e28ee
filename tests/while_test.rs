mod common;
use common::*;

#[test]
fn test_countdown() {
    let source = "DECLARE n\nn := 3\nWHILE n > 0\nPRINT n\nn := n - 1\nENDWHILE\nPRINTLN \"\"";
    assert_eq!(run(source), "321\n");
}

#[test]
fn test_while_false_skips_body() {
    let source = "DECLARE n\nWHILE n <> 0\nPRINTLN \"never\"\nENDWHILE\nPRINTLN \"after\"";
    assert_eq!(run(source), "after\n");
}

#[test]
fn test_nested_while() {
    let source = "DECLARE i, j\ni := 2\nWHILE i > 0\nj := 2\nWHILE j > 0\nPRINT i * 10 + j\nj := j - 1\nENDWHILE\ni := i - 1\nENDWHILE\nPRINTLN \"\"";
    assert_eq!(run(source), "22211211\n");
}

#[test]
fn test_while_with_if_inside() {
    let source = "DECLARE n\nn := 4\nWHILE n > 0\nIF n % 2 = 0\nPRINT n\nENDIF\nn := n - 1\nENDWHILE\nPRINTLN \"\"";
    assert_eq!(run(source), "42\n");
}

#[test]
fn test_endwhile_without_while() {
    let (output, errors) = run_counting("ENDWHILE", "");
    assert_eq!(errors, 1);
    assert_eq!(output, "?BLOCK MISMATCH IN 1; ENDWHILE WITH NO MATCHING WHILE\n");
}

#[test]
fn test_while_without_endwhile() {
    let source = "DECLARE n\nWHILE n = 1\nn := 2";
    let (output, errors) = run_counting(source, "");
    assert_eq!(errors, 1);
    assert_eq!(output, "?BLOCK MISMATCH IN 3; WHILE WITH NO MATCHING ENDWHILE\n");
}
