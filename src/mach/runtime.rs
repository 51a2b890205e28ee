use super::program::Program;
use super::symbol::SymbolTable;
use crate::error;
use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// ## Machine front
///
/// Binds a loaded [`Program`] to an input source, an output sink and an
/// interrupt flag, and drives the outermost activation. Generic over the
/// streams so tests run against in-memory buffers.
pub struct Runtime<R, W> {
    pub(crate) program: Program,
    input: R,
    output: W,
    interrupted: Arc<AtomicBool>,
}

impl<R: BufRead, W: Write> Runtime<R, W> {
    pub fn new(program: Program, input: R, output: W) -> Runtime<R, W> {
        Runtime {
            program,
            input,
            output,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Shared flag a signal handler can set to stop the run.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    pub(crate) fn interrupted(&self) -> bool {
        self.interrupted.swap(false, Ordering::SeqCst)
    }

    /// Run until ENDPROGRAM or the first counted fault. The outermost frame
    /// gets a return-value slot like any call, and a return address one past
    /// the last line so a top-level RETURN falls off the end.
    pub fn run(&mut self) -> usize {
        let end = self.program.lines().len() as i32;
        self.program.push_value(0);
        self.program.push_value(end);
        let mut local = SymbolTable::new();
        self.execute(&mut local, 0, 0);
        self.program.error_count()
    }

    pub(crate) fn write_str(&mut self, text: &str) {
        if self.output.write_all(text.as_bytes()).is_err() {
            self.program.error(error!(InternalError; "OUTPUT FAILED"));
        }
    }

    pub(crate) fn write_line(&mut self, text: &str) {
        self.write_str(text);
        self.write_str("\n");
    }

    /// One value per input line.
    pub(crate) fn read_value(&mut self) -> Option<i32> {
        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let text = buf.trim();
                match text.parse::<i32>() {
                    Ok(val) => Some(val),
                    Err(_) => {
                        self.program
                            .error(error!(SyntaxError; format!("{} IS NOT A NUMBER", text)));
                        Some(0)
                    }
                }
            }
        }
    }
}
