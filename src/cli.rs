pub mod command;
pub mod run;

use crate::domain::Command;
use crate::errors::AppError;
use std::fmt::Display;
use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

/// Line-oriented console: prompts and records on `out`, problems on `err`.
pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl Console<StdinLock<'static>, Stdout, Stderr> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Console { input, out, err }
    }

    // OUTPUT FUNCTIONS
    pub fn show_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.out, "\n..:: Working with text files ::..")?;
        writeln!(self.out, "1 - Insert contact")?;
        writeln!(self.out, "2 - List all contacts")?;
        writeln!(self.out, "4 - Search by name")?;
        writeln!(self.out, "5 - Exit")?;
        write!(self.out, "Enter an option: ")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn say(&mut self, message: impl Display) -> Result<(), AppError> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    pub fn complain(&mut self, message: impl Display) -> Result<(), AppError> {
        writeln!(self.err, "{message}")?;
        Ok(())
    }

    // INPUT FUNCTIONS
    /// Next input line, trimmed, with bytes that are not UTF-8 replaced.
    /// Fails with `EndOfInput` once input is exhausted.
    pub fn get_input(&mut self) -> Result<String, AppError> {
        let mut input = Vec::new();
        if self.input.read_until(b'\n', &mut input)? == 0 {
            return Err(AppError::EndOfInput);
        }
        Ok(String::from_utf8_lossy(&input).trim().to_string())
    }

    pub fn prompt(&mut self, label: &str) -> Result<String, AppError> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        self.get_input()
    }

    pub fn get_input_as_int(&mut self) -> Result<i32, AppError> {
        Ok(self.get_input()?.parse::<i32>()?)
    }

    pub fn parse_command_from_menu(&mut self) -> Result<Command, AppError> {
        self.show_menu()?;
        Command::try_from(self.get_input_as_int()?)
    }

    #[cfg(test)]
    pub(crate) fn into_parts(self) -> (R, W, E) {
        (self.input, self.out, self.err)
    }
}
