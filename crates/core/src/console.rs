//! Line-oriented console over any `BufRead` + `Write` pair.
//!
//! Every prompt is written and flushed before the matching line is read, so
//! prompt/read pairs happen strictly in program order. Input bytes that are
//! not valid UTF-8 are replaced rather than rejected, so a stray byte reaches
//! the caller as ordinary bad input.

use std::fmt::Display;
use std::io::{self, BufRead, Stdout, Write};
use std::str::FromStr;

use crate::error::ControllerError;

pub struct Console<R, W> {
    input: R,
    output: W,
    buf: Vec<u8>,
}

impl Console<io::StdinLock<'static>, Stdout> {
    /// Console on the process's stdin/stdout.
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            buf: Vec::new(),
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write one line.
    pub fn line(&mut self, text: impl Display) -> Result<(), ControllerError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<(), ControllerError> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Show `label` and read the next line, trimmed.
    pub fn prompt(&mut self, label: &str) -> Result<String, ControllerError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf)? == 0 {
            return Err(ControllerError::EndOfInput);
        }
        Ok(String::from_utf8_lossy(&self.buf).trim().to_string())
    }

    /// Show `label` and parse the next line as `T`.
    ///
    /// `field` names the value in the parse error.
    pub fn prompt_parse<T: FromStr>(
        &mut self,
        label: &str,
        field: &'static str,
    ) -> Result<T, ControllerError> {
        let raw = self.prompt(label)?;
        raw.parse()
            .map_err(|_| ControllerError::Parse { field, input: raw })
    }
}
