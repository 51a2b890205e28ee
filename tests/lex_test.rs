use slate::lang::{next_compare, next_factor, next_token, Terminator};

#[test]
fn test_keyword_then_argument_round_trip() {
    let mut line = "  PRINT   first  ".to_string();
    let keyword = next_token(&mut line, Terminator::Command).unwrap();
    let first = next_token(&mut line, Terminator::Space).unwrap();
    assert_eq!(keyword, "PRINT");
    assert_eq!(first, "first");
    assert_eq!(line, "");
}

#[test]
fn test_command_stops_at_paren() {
    let mut line = "gcd(a, b)".to_string();
    assert_eq!(next_token(&mut line, Terminator::Command).unwrap(), "gcd");
    assert_eq!(line, "(a, b)");
}

#[test]
fn test_comma_passes_nested_calls_through() {
    let mut line = "max(a, b), rest".to_string();
    assert_eq!(next_token(&mut line, Terminator::Comma).unwrap(), "max(a, b)");
    assert_eq!(next_token(&mut line, Terminator::Comma).unwrap(), ",");
    assert_eq!(next_token(&mut line, Terminator::Comma).unwrap(), "rest");
}

#[test]
fn test_quoted_run_is_one_token() {
    let mut line = "\"a, (b\" , x".to_string();
    let token = next_token(&mut line, Terminator::Comma).unwrap();
    assert_eq!(token, "\"a, (b\" ");
    assert!(next_token(&mut "\"open".to_string(), Terminator::Space).is_err());
}

#[test]
fn test_unbalanced_paren_is_an_error() {
    assert!(next_token(&mut "f(1, 2".to_string(), Terminator::Comma).is_err());
}

#[test]
fn test_factor_stream() {
    let mut expr = "3 * (width + 2) % gcd(a, b)".to_string();
    let mut factors = vec![];
    loop {
        let factor = next_factor(&mut expr).unwrap();
        if factor.is_empty() {
            break;
        }
        factors.push(factor);
    }
    assert_eq!(
        factors,
        vec!["3", "*", "(", "width", "+", "2", ")", "%", "~gcd(a, b)"]
    );
}

#[test]
fn test_factor_reports_missing_close() {
    assert!(next_factor(&mut "f(1".to_string()).is_err());
}

#[test]
fn test_compare_scan() {
    let mut line = "<= rest".to_string();
    assert_eq!(next_compare(&mut line), Some("<=".to_string()));
    assert_eq!(line, " rest");
    assert_eq!(next_compare(&mut "<>x".to_string()), Some("<>".to_string()));
    assert_eq!(next_compare(&mut "rest".to_string()), None);
}
