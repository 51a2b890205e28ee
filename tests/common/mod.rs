use slate::mach::{Program, Runtime};
use std::io::Cursor;

/// Run a source text with empty input, returning the transcript: everything
/// printed, then one line per reported error.
pub fn run(source: &str) -> String {
    run_with_input(source, "")
}

pub fn run_with_input(source: &str, input: &str) -> String {
    run_counting(source, input).0
}

/// Like `run_with_input`, also returning the final error count.
pub fn run_counting(source: &str, input: &str) -> (String, usize) {
    let mut program = Program::new();
    program
        .load(Cursor::new(source.to_string()))
        .expect("load source");
    let mut out: Vec<u8> = Vec::new();
    let mut runtime = Runtime::new(program, Cursor::new(input.to_string()), &mut out);
    let count = runtime.run();
    let errors: Vec<String> = runtime
        .program()
        .errors()
        .iter()
        .map(|error| error.to_string())
        .collect();
    drop(runtime);
    let mut text = String::from_utf8(out).expect("utf8 output");
    for error in errors {
        text.push_str(&error);
        text.push('\n');
    }
    (text, count)
}
