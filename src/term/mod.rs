extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;

use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use slate::error;
use slate::lang::Error;
use slate::mach::{Program, Runtime};
use std::fs::File;
use std::io::{self, BufReader, ErrorKind};
use std::sync::atomic::Ordering;

pub fn main() {
    if let Err(error) = main_loop() {
        eprintln!("{}", error);
    }
}

fn main_loop() -> io::Result<()> {
    let command = Interface::new("slate")?;

    // keep asking until a program loads
    let program = loop {
        command.set_prompt("Please enter program name: ")?;
        let filename = match command.read_line()? {
            ReadResult::Input(filename) => filename,
            ReadResult::Signal(_) | ReadResult::Eof => return Ok(()),
        };
        if filename.trim().is_empty() {
            continue;
        }
        match load(filename.trim()) {
            Ok(program) => {
                command.add_history_unique(filename);
                break program;
            }
            Err(error) => {
                println!("{}", Style::new().bold().paint(error.to_string()));
            }
        }
    };

    command.set_prompt("List program (y for yes)? ")?;
    let list = match command.read_line()? {
        ReadResult::Input(answer) => answer.trim().to_ascii_lowercase().starts_with('y'),
        ReadResult::Signal(_) | ReadResult::Eof => false,
    };
    if list {
        for (index, line) in program.lines().iter().enumerate() {
            println!("{:>3} {}", index + 1, line);
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut runtime = Runtime::new(program, stdin.lock(), stdout.lock());
    let interrupted = runtime.interrupt_flag();
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    runtime.run();
    for error in runtime.program().errors() {
        println!("{}", Style::new().bold().paint(error.to_string()));
    }
    Ok(())
}

fn load(filename: &str) -> Result<Program, Error> {
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(cause) => {
            let msg = cause.to_string();
            return match cause.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; msg)),
                _ => Err(error!(InternalError; msg)),
            };
        }
    };
    let mut program = Program::new();
    program.load(reader)?;
    Ok(program)
}
