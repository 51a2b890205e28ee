use super::stack::Stack;
use super::symbol::{Symbol, SymbolKind, SymbolTable};
use crate::error;
use crate::lang::{self, Command, Error, Terminator};
use std::io::BufRead;

type Result<T> = std::result::Result<T, Error>;

/// Fixed capacity of the source line store.
pub const MAX_LINES: usize = 500;

/// ## Interpreter state
///
/// Owns the loaded source, the line cursor, the scan buffer for the current
/// line, the global function/procedure table and the value stack shared by
/// every live call frame. All fault reporting funnels through [`Program::error`],
/// which stamps the current line number and counts the fault; callers get
/// sentinel values back and the executor stops once the count is nonzero.
pub struct Program {
    lines: Vec<String>,
    methods: SymbolTable,
    stack: Stack<i32>,
    line: String,
    last_token: String,
    command: Command,
    line_number: usize,
    errors: Vec<Error>,
}

/// Saved scan state, so a nested call can borrow the cursor machinery and
/// hand it back untouched.
pub(crate) struct Context {
    line: String,
    last_token: String,
    command: Command,
}

impl Default for Program {
    fn default() -> Program {
        Program::new()
    }
}

impl Program {
    pub fn new() -> Program {
        Program {
            lines: vec![],
            methods: SymbolTable::new(),
            stack: Stack::new("VALUE STACK OVERFLOW"),
            line: String::new(),
            last_token: String::new(),
            command: Command::Blank,
            line_number: 0,
            errors: vec![],
        }
    }

    /// Read the whole source, strip trailing control characters, and
    /// register every FUNCTION/PROCEDURE header in the method table.
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for read in reader.lines() {
            let mut line = match read {
                Ok(line) => line,
                Err(cause) => return Err(error!(InternalError; cause.to_string())),
            };
            while line.ends_with(|c: char| (c as u32) < 0x20) {
                line.pop();
            }
            if self.lines.len() >= MAX_LINES {
                return Err(error!(OutOfMemory; "PROGRAM TOO LONG"));
            }
            self.lines.push(line);
        }
        for index in 0..self.lines.len() {
            self.line = self.lines[index].clone();
            self.line_number = index + 1;
            let cmd = self.classify();
            if cmd.is_header() {
                let name = match lang::next_token(&mut self.line, Terminator::Paren) {
                    Ok(name) => name,
                    Err(_) => continue,
                };
                let kind = match cmd {
                    Command::Function => SymbolKind::Function,
                    _ => SymbolKind::Procedure,
                };
                self.methods.add(Symbol::new(name.trim(), index, kind));
            }
        }
        self.line.clear();
        self.last_token.clear();
        self.command = Command::Blank;
        self.line_number = 0;
        Ok(())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn methods(&self) -> &SymbolTable {
        &self.methods
    }

    /// Advance to the next line and classify it. Once the cursor passes the
    /// last line every step yields the synthetic ENDPROGRAM.
    pub fn step(&mut self) -> Command {
        if self.line_number >= self.lines.len() {
            self.line.clear();
            self.last_token.clear();
            self.command = Command::EndProgram;
        } else {
            self.line = self.lines[self.line_number].clone();
            self.line_number += 1;
            self.command = self.classify();
        }
        self.command
    }

    /// Classify the current line from its first word, quietly. After this
    /// the line buffer holds the statement's remaining text and the last
    /// token holds the first word (the variable of an ASSIGN, the callee of
    /// a CALL).
    fn classify(&mut self) -> Command {
        let head = match lang::next_token(&mut self.line, Terminator::Command) {
            Ok(head) => head,
            Err(cause) => {
                self.error(cause);
                String::new()
            }
        };
        lang::trim_space(&mut self.line);
        self.last_token = head.clone();
        if head.is_empty() {
            return Command::Blank;
        }
        if head.starts_with(';') {
            return Command::Comment;
        }
        if let Some(keyword) = Command::from_word(&head) {
            return keyword;
        }
        if let Some(at) = head.find(":=") {
            // := glued to the identifier
            let name = &head[..at];
            if lang::is_ident(name) {
                self.last_token = name.to_string();
                let tail = &head[at + 2..];
                if !tail.is_empty() {
                    self.line.insert_str(0, tail);
                }
                return Command::Assign;
            }
        } else if lang::is_ident(&head) {
            if self.line.starts_with(":=") {
                self.line.drain(..2);
                return Command::Assign;
            }
            if self.line.starts_with('(') {
                return Command::Call;
            }
        }
        Command::Unknown
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn last_token(&self) -> &str {
        &self.last_token
    }

    /// Scan the next token off the current line; scan faults are reported
    /// and yield an empty token.
    pub fn token(&mut self, until: Terminator) -> String {
        match lang::next_token(&mut self.line, until) {
            Ok(token) => {
                self.last_token = token.clone();
                token
            }
            Err(cause) => {
                self.error(cause);
                self.last_token.clear();
                String::new()
            }
        }
    }

    /// Scan a comparison operator off the current line.
    pub fn compare_op(&mut self) -> Option<String> {
        lang::next_compare(&mut self.line)
    }

    pub(crate) fn save(&self) -> Context {
        Context {
            line: self.line.clone(),
            last_token: self.last_token.clone(),
            command: self.command,
        }
    }

    pub(crate) fn restore(&mut self, context: Context) {
        self.line = context.line;
        self.last_token = context.last_token;
        self.command = context.command;
    }

    /// One-based number of the line the cursor has passed; also the return
    /// address a caller pushes, since stepping from it resumes after the
    /// call site.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Move the cursor. A target equal to the line count is allowed: the
    /// next step reports ENDPROGRAM.
    pub fn jump(&mut self, line_number: i32) {
        if line_number < 0 || line_number as usize > self.lines.len() {
            self.error(error!(OutOfRange; "LINE NUMBER OUT OF RANGE"));
        } else {
            self.line_number = line_number as usize;
        }
    }

    /// Report a fault: stamp the current line number, keep the message, and
    /// bump the count the executor polls.
    pub fn error(&mut self, error: Error) {
        let error = if error.has_line_number() {
            error
        } else {
            error.in_line_number(Some(self.line_number))
        };
        self.errors.push(error);
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    // *** Value stack access

    pub fn stack_size(&self) -> usize {
        self.stack.len()
    }

    pub fn push_value(&mut self, val: i32) {
        if let Err(cause) = self.stack.push(val) {
            self.error(cause);
        }
    }

    pub fn pop_values(&mut self, len: usize) {
        if let Err(cause) = self.stack.pop_n(len) {
            self.error(cause);
        }
    }

    pub fn top_value(&mut self) -> i32 {
        match self.stack.last() {
            Some(val) => *val,
            None => {
                self.error(error!(InternalError; "STACK UNDERFLOW"));
                0
            }
        }
    }

    /// Overwrite the top slot; RETURN uses this to leave the return value
    /// where the caller pushed the slot for it.
    pub fn set_top(&mut self, val: i32) {
        if self.stack.is_empty() {
            self.error(error!(InternalError; "STACK UNDERFLOW"));
            return;
        }
        let top = self.stack.len() - 1;
        if let Err(cause) = self.stack.set(top, val) {
            self.error(cause);
        }
    }

    pub fn value_at(&mut self, index: usize) -> i32 {
        match self.stack.get(index) {
            Ok(val) => *val,
            Err(cause) => {
                self.error(cause);
                0
            }
        }
    }

    // *** Variables

    /// Identifier check that reports exactly one error when the shape is
    /// wrong.
    pub fn valid_id(&mut self, id: &str) -> bool {
        match lang::check_ident(id) {
            Ok(()) => true,
            Err(cause) => {
                self.error(cause);
                false
            }
        }
    }

    /// Allocate one local slot (initialized to zero) and bind the name to
    /// it. Returns whether a slot was pushed.
    pub fn declare_local(&mut self, name: &str, local: &mut SymbolTable) -> bool {
        let offset = self.stack.len();
        if let Err(cause) = self.stack.push(0) {
            self.error(cause);
            return false;
        }
        local.add(Symbol::new(name, offset, SymbolKind::Variable));
        true
    }

    /// Bind a parameter name to an argument slot already on the stack,
    /// `back` slots down from the top. Returns false on a duplicate name.
    pub fn bind_parm(&mut self, name: &str, back: usize, local: &mut SymbolTable) -> bool {
        let len = self.stack.len();
        if back >= len {
            self.error(error!(InternalError; "STACK UNDERFLOW"));
            return false;
        }
        local.add(Symbol::new(name, len - 1 - back, SymbolKind::Variable))
    }

    pub fn variable_value(&mut self, name: &str, local: &SymbolTable) -> i32 {
        match self.variable_offset(name, local) {
            Some(offset) => self.value_at(offset),
            None => 0,
        }
    }

    pub fn set_variable(&mut self, name: &str, val: i32, local: &SymbolTable) {
        if let Some(offset) = self.variable_offset(name, local) {
            if let Err(cause) = self.stack.set(offset, val) {
                self.error(cause);
            }
        }
    }

    fn variable_offset(&mut self, name: &str, local: &SymbolTable) -> Option<usize> {
        match local.get(name) {
            None => {
                self.error(error!(UndefinedSymbol; format!("{} NOT FOUND", name)));
                None
            }
            Some(symbol) => {
                if symbol.kind() != SymbolKind::Variable {
                    self.error(error!(TypeMismatch; format!("{} IS NOT A VARIABLE", name)));
                    None
                } else {
                    Some(symbol.offset())
                }
            }
        }
    }

    /// Look up a FUNCTION/PROCEDURE registered at load time.
    pub fn method(&self, name: &str) -> Option<Symbol> {
        self.methods.get(name).cloned()
    }
}
