use super::runtime::Runtime;
use super::stack::Stack;
use super::symbol::SymbolTable;
use crate::error;
use crate::lang::{self, Terminator, CALL_MARK};
use rand::Rng;
use std::io::{BufRead, Write};

/// One of the five binary operators.
fn is_operator(s: &str) -> bool {
    matches!(s, "+" | "-" | "*" | "/" | "%")
}

/// Multiplicative operators bind tighter; equal precedence associates left.
fn precedence(s: &str) -> i32 {
    match s {
        "*" | "/" | "%" => 1,
        _ => 0,
    }
}

impl<R: BufRead, W: Write> Runtime<R, W> {
    /// Shunting-yard over the factor stream, then evaluate the postfix
    /// stack. Faults report through the program log and yield 0.
    pub(crate) fn parse_equation(&mut self, expr: &str, local: &SymbolTable) -> i32 {
        let mut expr = expr.to_string();
        let mut postfix: Stack<String> = Stack::new("EQUATION TOO LONG");
        let mut operators: Stack<String> = Stack::new("EQUATION TOO DEEP");
        let mut lead = true; // operand position: a sign here is unary
        loop {
            let mut factor = match lang::next_factor(&mut expr) {
                Ok(factor) => factor,
                Err(cause) => {
                    self.program.error(cause);
                    return 0;
                }
            };
            if factor.is_empty() {
                break;
            }
            if factor == "(" {
                self.push_text(&mut operators, factor);
                lead = true;
            } else if factor == ")" {
                loop {
                    match operators.pop() {
                        Ok(op) => {
                            if op == "(" {
                                break;
                            }
                            self.push_text(&mut postfix, op);
                        }
                        Err(_) => {
                            self.program.error(error!(SyntaxError; "PARENTHESIS MISMATCH"));
                            return 0;
                        }
                    }
                }
                lead = false;
            } else if lead && (factor == "+" || factor == "-") {
                // unary sign: carried on the front of the operand
                let operand = match lang::next_factor(&mut expr) {
                    Ok(operand) => operand,
                    Err(cause) => {
                        self.program.error(cause);
                        return 0;
                    }
                };
                if operand.is_empty() || is_operator(&operand) || operand == "(" || operand == ")" {
                    self.program.error(error!(SyntaxError; "LEADING + OR - ONLY"));
                    return 0;
                }
                factor.push_str(&operand);
                self.push_text(&mut postfix, factor);
                lead = false;
            } else if is_operator(&factor) {
                loop {
                    let drain = match operators.last() {
                        None => false,
                        Some(top) => top != "(" && precedence(top) >= precedence(&factor),
                    };
                    if !drain {
                        break;
                    }
                    match operators.pop() {
                        Ok(op) => self.push_text(&mut postfix, op),
                        Err(_) => break,
                    }
                }
                self.push_text(&mut operators, factor);
                lead = true;
            } else {
                let first = factor.chars().next().unwrap_or(' ');
                if first.is_ascii_alphanumeric() || first == CALL_MARK {
                    self.push_text(&mut postfix, factor);
                    lead = false;
                } else {
                    self.program
                        .error(error!(SyntaxError; format!("{} UNEXPECTED IN EQUATION", factor)));
                    return 0;
                }
            }
            if self.program.error_count() > 0 {
                return 0;
            }
        }
        loop {
            match operators.pop() {
                Ok(op) => {
                    if op == "(" {
                        self.program.error(error!(SyntaxError; "PARENTHESIS MISMATCH"));
                        return 0;
                    }
                    self.push_text(&mut postfix, op);
                }
                Err(_) => break,
            }
        }
        self.calculate(&mut postfix, local)
    }

    fn push_text(&mut self, stack: &mut Stack<String>, token: String) {
        if let Err(cause) = stack.push(token) {
            self.program.error(cause);
        }
    }

    /// Evaluate the postfix stack by treating the top as prefix: pop an
    /// operator, resolve its second then its first operand (recursing when
    /// an operand is itself the result of an operator), and apply.
    pub(crate) fn calculate(&mut self, postfix: &mut Stack<String>, local: &SymbolTable) -> i32 {
        let token = match postfix.pop() {
            Ok(token) => token,
            Err(_) => {
                self.program.error(error!(SyntaxError; "BLANK EQUATION"));
                return 0;
            }
        };
        if !is_operator(&token) {
            if !postfix.is_empty() {
                self.program.error(error!(SyntaxError; "BAD EQUATION"));
                return 0;
            }
            let mut operand = token;
            return self.convert_operand(&mut operand, local);
        }
        let result2 = match self.next_operand(postfix, local, "MISSING OPERAND") {
            Some(val) => val,
            None => return 0,
        };
        let result = match self.next_operand(postfix, local, "MISSING SECOND OPERAND") {
            Some(val) => val,
            None => return 0,
        };
        match token.as_str() {
            "+" => result.wrapping_add(result2),
            "-" => result.wrapping_sub(result2),
            "*" => result.wrapping_mul(result2),
            "/" => {
                if result2 == 0 {
                    self.program.error(error!(DivisionByZero));
                    0
                } else {
                    result.wrapping_div(result2)
                }
            }
            "%" => {
                if result2 == 0 {
                    self.program.error(error!(DivisionByZero; "REMAINDER BY ZERO"));
                    0
                } else {
                    result.wrapping_rem(result2)
                }
            }
            _ => 0,
        }
    }

    fn next_operand(
        &mut self,
        postfix: &mut Stack<String>,
        local: &SymbolTable,
        missing: &'static str,
    ) -> Option<i32> {
        let operator = match postfix.last() {
            None => {
                self.program.error(error!(SyntaxError; missing));
                return None;
            }
            Some(top) => is_operator(top),
        };
        if operator {
            return Some(self.calculate(postfix, local));
        }
        match postfix.pop() {
            Ok(mut operand) => Some(self.convert_operand(&mut operand, local)),
            Err(cause) => {
                self.program.error(cause);
                None
            }
        }
    }

    /// Resolve one operand: strip a unary sign, then a digit run is a
    /// literal, a letter run is a variable, and a marker-tagged run is a
    /// function call whose return value is taken.
    pub(crate) fn convert_operand(&mut self, operand: &mut String, local: &SymbolTable) -> i32 {
        let mut negate = false;
        if operand.starts_with('+') {
            operand.remove(0);
        } else if operand.starts_with('-') {
            operand.remove(0);
            negate = true;
        }
        lang::trim_space(operand);
        let first = match operand.chars().next() {
            Some(first) => first,
            None => {
                self.program.error(error!(SyntaxError; "LEADING + OR - ONLY"));
                return 0;
            }
        };
        let result = if first.is_ascii_digit() {
            match operand.parse::<i32>() {
                Ok(val) => val,
                Err(_) => {
                    self.program
                        .error(error!(Overflow; format!("{} OUT OF RANGE", operand)));
                    0
                }
            }
        } else if first == CALL_MARK {
            self.call_operand(operand, local)
        } else if first.is_ascii_alphabetic() {
            self.program.variable_value(operand, local)
        } else {
            self.program
                .error(error!(SyntaxError; format!("{} UNKNOWN OPERAND", operand)));
            0
        };
        if negate {
            result.wrapping_neg()
        } else {
            result
        }
    }

    /// A call in operand position: `rand()` resolves to the built-in,
    /// anything else must be a loaded FUNCTION or PROCEDURE and runs under
    /// the call protocol, yielding its return slot.
    fn call_operand(&mut self, operand: &mut String, local: &SymbolTable) -> i32 {
        operand.remove(0); // the call marker
        let paren = match operand.find('(') {
            Some(paren) => paren,
            None => {
                self.program
                    .error(error!(SyntaxError; format!("{} NOT A CALL", operand)));
                return 0;
            }
        };
        let name = operand[..paren].to_string();
        let mut args = operand[paren..].to_string();
        if name == "rand" {
            if let Err(cause) = lang::strip_parens(&mut args) {
                self.program.error(cause);
            }
            lang::trim_space(&mut args);
            if !args.is_empty() {
                self.program
                    .error(error!(SyntaxError; "BUILT-IN RAND HAS NO PARAMETERS"));
            }
            return rand::thread_rng().gen_range(0..=32767);
        }
        let symbol = match self.program.method(&name) {
            Some(symbol) => symbol,
            None => {
                self.program
                    .error(error!(UndefinedSymbol; format!("{} FUNCTION NOT FOUND", name)));
                return 0;
            }
        };
        let here = self.program.line_number() as i32;
        self.program.push_value(0); // return-value slot
        self.program.push_value(here); // return address
        let count = self.count_arguments(&mut args, local);
        let context = self.program.save();
        let mut callee = SymbolTable::new();
        self.execute(&mut callee, symbol.offset(), count);
        self.program.restore(context);
        let result = self.program.top_value(); // the filled return slot
        self.program.pop_values(1);
        result
    }

    /// Evaluate each parenthesized argument in the caller's scope, pushing
    /// the values as the callee's parameter slots. Returns how many.
    pub(crate) fn count_arguments(&mut self, args: &mut String, local: &SymbolTable) -> usize {
        if let Err(cause) = lang::strip_parens(args) {
            self.program.error(cause);
            return 0;
        }
        lang::trim_space(args);
        let mut count = 0;
        while !args.is_empty() {
            let text = match lang::next_token(args, Terminator::Comma) {
                Ok(text) => text,
                Err(cause) => {
                    self.program.error(cause);
                    break;
                }
            };
            let val = self.parse_equation(&text, local);
            self.program.push_value(val);
            count += 1;
            if !args.is_empty() {
                let sep = match lang::next_token(args, Terminator::Comma) {
                    Ok(sep) => sep,
                    Err(cause) => {
                        self.program.error(cause);
                        break;
                    }
                };
                if sep != "," {
                    self.program.error(error!(SyntaxError; "MISSING COMMA"));
                    break;
                }
            }
            lang::trim_space(args);
        }
        count
    }

    /// `left comparator right` with both sides full equations. An
    /// unrecognized comparator reports a fault and compares false.
    pub(crate) fn compare_bool(&mut self, local: &SymbolTable) -> bool {
        let left = self.program.token(Terminator::Compare);
        let val1 = self.parse_equation(&left, local);
        let op = match self.program.compare_op() {
            Some(op) => op,
            None => {
                self.program.error(error!(SyntaxError; "MISSING COMPARISON"));
                return false;
            }
        };
        let right = self.program.token(Terminator::Line);
        let val2 = self.parse_equation(&right, local);
        match op.as_str() {
            "=" => val1 == val2,
            "<" => val1 < val2,
            ">" => val1 > val2,
            "<=" => val1 <= val2,
            ">=" => val1 >= val2,
            "<>" => val1 != val2,
            _ => {
                self.program
                    .error(error!(SyntaxError; format!("INVALID COMPARISON OF {}", op)));
                false
            }
        }
    }
}
