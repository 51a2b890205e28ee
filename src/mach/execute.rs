use super::runtime::Runtime;
use super::stack::Stack;
use super::symbol::{SymbolKind, SymbolTable};
use crate::error;
use crate::lang::{self, Command, Terminator};
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Runtime<R, W> {
    /// Run one activation.
    ///
    /// On entry the caller has already pushed a return-value slot, the
    /// return address, and `num_parms` argument slots. The frame invariant
    /// is hard: on termination everything above the return-value slot is
    /// gone, the cursor holds the return address, and the slot carries the
    /// function's result (or its initial zero).
    pub(crate) fn execute(&mut self, local: &mut SymbolTable, line_start: usize, num_parms: usize) {
        let mut whiles: Stack<i32> = Stack::new("WHILE NESTING TOO DEEP");
        let mut num_locals = 0usize;
        let mut num_ifs = 0i32;
        let mut num_whiles = 0i32;

        self.program.jump(line_start as i32);
        let mut header = self.program.step();
        while header.is_empty() {
            header = self.program.step();
        }
        let mut cmd = header;
        if header.is_header() {
            num_locals = self.bind_parms(local, num_parms);
            cmd = self.program.step();
        } else if num_parms > 0 {
            self.program
                .error(error!(SyntaxError; "EXPECTED FUNCTION OR PROCEDURE"));
        }
        loop {
            if self.program.error_count() > 0 {
                return;
            }
            if self.interrupted() {
                self.program.error(error!(Break));
                return;
            }
            match cmd {
                Command::Assign => self.do_assign(local),
                Command::Call => self.do_call(local),
                Command::Comment | Command::Blank => {}
                Command::Declare => num_locals += self.do_declare(local),
                Command::EndIf => {
                    num_ifs -= 1;
                    if num_ifs < 0 {
                        self.program
                            .error(error!(BlockMismatch; "ENDIF WITH NO MATCHING IF"));
                    }
                }
                Command::EndProgram => return,
                Command::EndWhile => {
                    num_whiles -= 1;
                    if num_whiles < 0 {
                        self.program
                            .error(error!(BlockMismatch; "ENDWHILE WITH NO MATCHING WHILE"));
                    } else {
                        match whiles.pop() {
                            Ok(back) => self.program.jump(back),
                            Err(cause) => self.program.error(cause),
                        }
                    }
                }
                Command::Function | Command::Procedure => {
                    // fell into the next body: implicit return, no value
                    self.unwind(header, num_locals, 0);
                    return;
                }
                Command::If => {
                    if self.compare_bool(local) {
                        num_ifs += 1;
                    } else {
                        self.skip_block(Command::If, Command::EndIf);
                    }
                }
                Command::Input => self.do_input(local),
                Command::Print => self.do_print(local, false),
                Command::PrintLn => self.do_print(local, true),
                Command::Return => {
                    self.do_return(header, num_locals, local);
                    return;
                }
                Command::Unknown => {
                    if !self.program.last_token().is_empty() {
                        self.program.error(error!(BadCommand));
                    }
                }
                Command::While => {
                    if self.compare_bool(local) {
                        num_whiles += 1;
                        let here = self.program.line_number() as i32 - 1;
                        if let Err(cause) = whiles.push(here) {
                            self.program.error(cause);
                        }
                    } else {
                        self.skip_block(Command::While, Command::EndWhile);
                    }
                }
            }
            cmd = self.program.step();
        }
    }

    /// Parse the header's parameter list, binding each name to one of the
    /// argument slots the caller pushed: the first name is `num_parms`
    /// slots down, the last is the top. A bad name is reported but later
    /// names still bind. Returns how many slots bound.
    fn bind_parms(&mut self, local: &mut SymbolTable, num_parms: usize) -> usize {
        self.program.token(Terminator::Paren); // past the method name
        let mut parms = self.program.token(Terminator::Line);
        if let Err(cause) = lang::strip_parens(&mut parms) {
            self.program.error(cause);
        }
        let mut num_locals = 0;
        for parm in 0..num_parms {
            let name = match lang::next_token(&mut parms, Terminator::Comma) {
                Ok(name) => name,
                Err(cause) => {
                    self.program.error(cause);
                    break;
                }
            };
            let name = name.trim();
            if self.program.valid_id(name) {
                if self.program.bind_parm(name, num_parms - 1 - parm, local) {
                    num_locals += 1;
                } else {
                    self.program
                        .error(error!(SyntaxError; format!("DUPLICATE PARAMETER {}", name)));
                }
            }
            let _ = lang::next_token(&mut parms, Terminator::Comma); // separator
        }
        num_locals
    }

    /// Tear a frame down: drop parameters and locals, move the cursor to
    /// the return address and drop it, and for a FUNCTION leave `val` in
    /// the return-value slot now on top.
    fn unwind(&mut self, header: Command, num_locals: usize, val: i32) {
        self.program.pop_values(num_locals);
        let back = self.program.top_value();
        self.program.pop_values(1);
        self.program.jump(back);
        if header == Command::Function {
            self.program.set_top(val);
        }
    }

    fn do_assign(&mut self, local: &SymbolTable) {
        let variable = self.program.last_token().to_string();
        let text = self.program.token(Terminator::Line);
        let val = self.parse_equation(&text, local);
        self.program.set_variable(&variable, val, local);
    }

    /// CALL statement: like a call operand, but the callee must be a
    /// PROCEDURE and the untouched return slot is discarded.
    fn do_call(&mut self, local: &SymbolTable) {
        let method = self.program.last_token().to_string();
        let symbol = match self.program.method(&method) {
            Some(symbol) => symbol,
            None => {
                self.program
                    .error(error!(UndefinedSymbol; format!("{} PROCEDURE NOT FOUND", method)));
                return;
            }
        };
        if symbol.kind() != SymbolKind::Procedure {
            self.program
                .error(error!(TypeMismatch; format!("{} IS NOT A PROCEDURE", method)));
            return;
        }
        let here = self.program.line_number() as i32;
        self.program.push_value(0); // return-value slot
        self.program.push_value(here); // return address
        let mut args = self.program.token(Terminator::Line);
        let count = self.count_arguments(&mut args, local);
        let context = self.program.save();
        let mut callee = SymbolTable::new();
        self.execute(&mut callee, symbol.offset(), count);
        self.program.restore(context);
        self.program.pop_values(1); // discard the unused return slot
    }

    /// DECLARE: one fresh zeroed slot per name. Returns how many slots
    /// were pushed so the frame teardown count stays exact.
    fn do_declare(&mut self, local: &mut SymbolTable) -> usize {
        let mut added = 0;
        loop {
            let token = self.program.token(Terminator::Comma);
            let name = token.trim();
            if name.is_empty() {
                break;
            }
            if self.program.valid_id(name) && self.program.declare_local(name, local) {
                added += 1;
            }
            let sep = self.program.token(Terminator::Comma);
            if sep.is_empty() {
                break;
            }
        }
        added
    }

    fn do_input(&mut self, local: &SymbolTable) {
        let mut token = self.program.token(Terminator::Comma);
        if token.starts_with('"') {
            // optional prompt
            let mut prompt = token.trim_end().to_string();
            if let Err(cause) = lang::strip_quotes(&mut prompt) {
                self.program.error(cause);
            }
            self.write_line(&prompt);
            token = self.program.token(Terminator::Comma);
        }
        loop {
            if token.is_empty() {
                return;
            }
            if token != "," {
                let name = token.trim().to_string();
                match local.get(&name).map(|symbol| symbol.kind()) {
                    Some(SymbolKind::Variable) => match self.read_value() {
                        Some(val) => self.program.set_variable(&name, val, local),
                        None => {
                            self.program.error(error!(EndOfInput));
                            return;
                        }
                    },
                    Some(_) => {
                        self.program
                            .error(error!(TypeMismatch; format!("{} IS NOT A VARIABLE", name)));
                    }
                    None => {
                        self.program
                            .error(error!(UndefinedSymbol; format!("{} NOT FOUND", name)));
                    }
                }
            }
            token = self.program.token(Terminator::Comma);
        }
    }

    /// PRINT/PRINTLN: quoted text verbatim, anything else as an equation.
    fn do_print(&mut self, local: &SymbolTable, line_break: bool) {
        loop {
            let token = self.program.token(Terminator::Comma);
            if token.is_empty() {
                break;
            }
            if token.starts_with(',') {
                continue;
            }
            if token.starts_with('"') {
                let mut text = token.trim_end().to_string();
                if let Err(cause) = lang::strip_quotes(&mut text) {
                    self.program.error(cause);
                }
                self.write_str(&text);
            } else {
                let val = self.parse_equation(&token, local);
                self.write_str(&val.to_string());
            }
        }
        if line_break {
            self.write_str("\n");
        }
    }

    fn do_return(&mut self, header: Command, num_locals: usize, local: &SymbolTable) {
        let text = self.program.token(Terminator::Line);
        let mut val = 0;
        if header == Command::Function {
            if text.is_empty() {
                self.program
                    .error(error!(ReturnMismatch; "RETURN VALUE NOT FOUND"));
            } else {
                val = self.parse_equation(&text, local);
            }
        } else if !text.is_empty() {
            self.program
                .error(error!(ReturnMismatch; "PROCEDURE CANNOT RETURN A VALUE"));
        }
        self.unwind(header, num_locals, val);
    }

    /// Jump past a false IF/WHILE body: count nested openers of the same
    /// kind, stop on the closer that brings the count to zero. Running
    /// into a header or the end of the source is a block mismatch.
    fn skip_block(&mut self, opener: Command, closer: Command) {
        let mut depth = 1;
        loop {
            if self.program.error_count() > 0 {
                return;
            }
            let cmd = self.program.step();
            if cmd == opener {
                depth += 1;
            } else if cmd == closer {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            } else if cmd == Command::EndProgram || cmd.is_header() {
                self.program
                    .error(error!(BlockMismatch; format!("{} WITH NO MATCHING {}", opener, closer)));
                return;
            }
        }
    }
}
