//! CLI flags and interactive prompt helpers.
use std::io::{self, BufRead, Write};

pub mod args;

pub use args::{LaunchArgs, LaunchPlan};

/// Print `message` without a trailing newline and read one line from `input`.
///
/// Returns an empty string at end of input, so a piped or closed stdin
/// behaves like the user pressing Enter.
pub fn prompt_line(message: &str, input: &mut impl BufRead) -> io::Result<String> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{message}")?;
    stdout.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}
