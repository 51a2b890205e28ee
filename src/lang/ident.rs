// Identifier rules are shared by the classifier, DECLARE, INPUT,
// and parameter binding.

use super::Error;
use crate::error;

/// Shape test for a Slate identifier: a letter followed by letters or digits.
pub fn is_ident(id: &str) -> bool {
    check_ident(id).is_ok()
}

/// Like `is_ident` but says which rule was broken.
pub fn check_ident(id: &str) -> Result<(), Error> {
    let mut chars = id.chars();
    match chars.next() {
        None => return Err(error!(SyntaxError; "BLANK IDENTIFIER")),
        Some(ch) => {
            if !ch.is_ascii_alphabetic() {
                return Err(error!(SyntaxError; format!("{} MUST START WITH A LETTER", id)));
            }
        }
    }
    for ch in chars {
        if !ch.is_ascii_alphanumeric() {
            return Err(error!(SyntaxError; format!("INVALID CHARACTER IN {}", id)));
        }
    }
    Ok(())
}
