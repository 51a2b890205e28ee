use super::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Marker prefixed to a scanned function-call operand so the evaluator can
/// tell `name(args)` from a plain variable.
pub const CALL_MARK: char = '~';

/// Where a token scan stops. The terminator character itself is left in the
/// buffer, except for the lone-comma case documented on `Comma`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Terminator {
    /// First space or `(`: isolates a keyword or a call's bare name.
    Command,
    /// Top-level `,`. Commas nested in parentheses pass through. If the
    /// buffer starts with the comma, the comma itself is the token and is
    /// consumed, so callers can tell "separator" from "out of items".
    Comma,
    /// First `<`, `=` or `>`.
    Compare,
    /// The remainder of the buffer, unconditionally.
    Line,
    /// First `(`.
    Paren,
    /// First space.
    Space,
}

/// Remove leading and trailing blanks from a scan buffer.
pub fn trim_space(line: &mut String) {
    let trimmed = line.trim_matches(|c| c == ' ' || c == '\t');
    if trimmed.len() != line.len() {
        *line = trimmed.to_string();
    }
}

/// Scan one token off the front of `line`, stopping per `until`.
///
/// A double-quoted run always passes through whole, both quotes included,
/// no matter the terminator. A tab counts as a space for termination and
/// widens to three spaces inside a token.
pub fn next_token(line: &mut String, until: Terminator) -> Result<String> {
    trim_space(line);
    if until == Terminator::Line {
        let token = std::mem::take(line);
        return Ok(token);
    }
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut token = String::new();
    let mut depth = 0i32;
    let mut cut = line.len();
    let mut x = 0;
    while x < chars.len() {
        let (pos, raw) = chars[x];
        let ch = if raw == '\t' { ' ' } else { raw };
        let stop = match until {
            Terminator::Command => ch == ' ' || ch == '(',
            Terminator::Compare => ch == '<' || ch == '=' || ch == '>',
            Terminator::Paren => ch == '(',
            Terminator::Space => ch == ' ',
            Terminator::Comma | Terminator::Line => false,
        };
        if stop {
            cut = pos;
            break;
        }
        if until == Terminator::Comma && ch == ',' && depth <= 0 {
            if x == 0 {
                // the comma itself is the token
                token.push(',');
                cut = pos + 1;
            } else {
                cut = pos;
            }
            break;
        }
        if ch == '"' {
            token.push('"');
            x += 1;
            loop {
                if x >= chars.len() {
                    return Err(error!(SyntaxError; "QUOTE MISMATCH"));
                }
                let (_, qc) = chars[x];
                token.push(qc);
                x += 1;
                if qc == '"' {
                    break;
                }
            }
            continue;
        }
        if ch == '(' {
            depth += 1;
        } else if ch == ')' {
            depth -= 1;
        }
        if raw == '\t' {
            token.push_str("   ");
        } else {
            token.push(ch);
        }
        x += 1;
    }
    if depth > 0 {
        return Err(error!(SyntaxError; "PARENTHESIS MISMATCH"));
    }
    line.drain(..cut);
    Ok(token)
}

/// Scan one arithmetic atom off the front of `expr`: a single-character
/// operator or parenthesis, a digit run, an identifier, or a whole
/// `name(args)` call tagged with [`CALL_MARK`]. Returns an empty string
/// once the buffer is exhausted.
pub fn next_factor(expr: &mut String) -> Result<String> {
    trim_space(expr);
    let first = match expr.chars().next() {
        Some(ch) => ch,
        None => return Ok(String::new()),
    };
    if "()*/+-%".contains(first) {
        expr.drain(..first.len_utf8());
        return Ok(first.to_string());
    }
    let run = if first.is_ascii_digit() {
        expr.chars().take_while(|c| c.is_ascii_digit()).count()
    } else if first.is_ascii_alphabetic() {
        expr.chars().take_while(|c| c.is_ascii_alphanumeric()).count()
    } else {
        // not part of any factor; hand the character back as its own token
        expr.drain(..first.len_utf8());
        return Ok(first.to_string());
    };
    let token: String = expr.drain(..run).collect();
    trim_space(expr);
    if first.is_ascii_alphabetic() && expr.starts_with('(') {
        // a call: take the whole balanced argument text as one atom
        let mut depth = 0i32;
        let mut cut = None;
        for (pos, ch) in expr.char_indices() {
            match ch {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
            if depth == 0 {
                cut = Some(pos + 1);
                break;
            }
        }
        let cut = match cut {
            Some(cut) => cut,
            None => {
                return Err(error!(SyntaxError; format!("MISSING ) IN {} CALL", token)));
            }
        };
        let mut tagged = String::new();
        tagged.push(CALL_MARK);
        tagged.push_str(&token);
        for ch in expr.drain(..cut) {
            tagged.push(ch);
        }
        return Ok(tagged);
    }
    Ok(token)
}

/// Scan a one- or two-character comparison operator. Validation of the
/// combination is left to the caller.
pub fn next_compare(line: &mut String) -> Option<String> {
    trim_space(line);
    let mut op = String::new();
    for ch in line.chars().take(2) {
        if ch == '<' || ch == '=' || ch == '>' {
            op.push(ch);
        } else {
            break;
        }
    }
    if op.is_empty() {
        return None;
    }
    line.drain(..op.len());
    Some(op)
}

/// Remove a leading and trailing double quote.
pub fn strip_quotes(s: &mut String) -> Result<()> {
    if !s.starts_with('"') {
        return Err(error!(SyntaxError; "NO BEGINNING QUOTE"));
    }
    s.remove(0);
    if !s.ends_with('"') {
        return Err(error!(SyntaxError; "NO ENDING QUOTE"));
    }
    s.pop();
    Ok(())
}

/// Remove a leading `(` and trailing `)`.
pub fn strip_parens(s: &mut String) -> Result<()> {
    if !s.starts_with('(') {
        return Err(error!(SyntaxError; "NO BEGINNING PARENTHESIS"));
    }
    s.remove(0);
    if !s.ends_with(')') {
        return Err(error!(SyntaxError; "NO ENDING PARENTHESIS"));
    }
    s.pop();
    Ok(())
}
