use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use crate::core::engine;
use crate::domain::model::MAX_LINE_LEN;
use crate::utils::error::CalcError;

/// Prompt written before each read.
pub const PROMPT: &str = "> ";

/// Input line that ends the session without being evaluated. Matched
/// exactly, before any validation.
pub const EXIT_SENTINEL: &str = "exit";

#[derive(Debug, Clone)]
pub struct ReplOptions {
    pub show_prompt: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self { show_prompt: true }
    }
}

/// Accounting for one shell session.
#[derive(Debug, Clone, Default)]
pub struct SessionSummary {
    pub lines_read: u64,
    pub ok: u64,
    pub errors: u64,
    pub elapsed: Duration,
}

/// The read-eval-print shell around the stateless evaluation core.
///
/// Every input line produces exactly one output line: the evaluation
/// result, or `Error: ` followed by the reason. Evaluation failures never
/// end the session; only the exit sentinel, end of input, or an I/O failure
/// of the shell itself do. Input arrives as raw bytes, so a line that is
/// not valid UTF-8 is rejected like any other invalid input instead of
/// tearing the session down.
pub struct Repl<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    options: ReplOptions,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(reader: R, writer: W, options: ReplOptions) -> Self {
        Self {
            reader,
            writer,
            options,
        }
    }

    pub fn run(&mut self) -> io::Result<SessionSummary> {
        let started = Instant::now();
        let mut summary = SessionSummary::default();
        let mut raw = Vec::new();

        loop {
            if self.options.show_prompt {
                write!(self.writer, "{}", PROMPT)?;
                self.writer.flush()?;
            }

            raw.clear();
            if self.reader.read_until(b'\n', &mut raw)? == 0 {
                tracing::debug!("end of input");
                break;
            }

            strip_newline(&mut raw);
            summary.lines_read += 1;

            if raw == EXIT_SENTINEL.as_bytes() {
                tracing::debug!("exit sentinel received");
                break;
            }

            let outcome = if raw.len() > MAX_LINE_LEN {
                Err(CalcError::LineTooLong)
            } else {
                // Undecodable bytes are invalid input, not an I/O failure.
                match std::str::from_utf8(&raw) {
                    Ok(line) => engine::evaluate_line(line),
                    Err(_) => Err(CalcError::InvalidCharacters),
                }
            };

            match outcome {
                Ok(result) => {
                    summary.ok += 1;
                    writeln!(self.writer, "{}", result)?;
                }
                Err(err) => {
                    summary.errors += 1;
                    tracing::debug!("rejected {:?}: {}", String::from_utf8_lossy(&raw), err);
                    writeln!(self.writer, "Error: {}", err)?;
                }
            }
        }

        self.writer.flush()?;
        summary.elapsed = started.elapsed();
        Ok(summary)
    }
}

fn strip_newline(line: &mut Vec<u8>) {
    if line.ends_with(b"\n") {
        line.pop();
        if line.ends_with(b"\r") {
            line.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_newline() {
        let mut line = b"1+2\n".to_vec();
        strip_newline(&mut line);
        assert_eq!(line, b"1+2");

        let mut line = b"1+2\r\n".to_vec();
        strip_newline(&mut line);
        assert_eq!(line, b"1+2");

        // Without a trailing newline nothing is removed, \r included.
        let mut line = b"1+2\r".to_vec();
        strip_newline(&mut line);
        assert_eq!(line, b"1+2\r");

        let mut line = Vec::new();
        strip_newline(&mut line);
        assert!(line.is_empty());
    }
}
