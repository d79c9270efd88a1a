//! Blocking terminal on top of any reader/writer pair.
//!
//! The session reads three kinds of input through a [`Tty`]:
//! - whitespace-delimited tokens (command names and filenames),
//! - whole lines (text collected by `save`),
//! - raw bytes until end of input (text collected by `append`).
//!
//! Everything the user sees is written through the same `Tty`, so tests can
//! drive a whole session with a `Cursor` and a `Vec<u8>`.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Whitespace as understood by `scanf("%s")`, vertical tab included.
fn is_blank(c: u8) -> bool {
    c.is_ascii_whitespace() || c == 0x0B
}

pub struct Tty<'io> {
    input: &'io mut dyn BufRead,
    output: &'io mut dyn Write,
}

impl<'io> Tty<'io> {
    pub fn new(input: &'io mut dyn BufRead, output: &'io mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Print `text` without a newline and flush so it shows before we block.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Echo bytes exactly as given.
    pub fn echo(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.output.write_all(bytes)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    /// Read the next whitespace-delimited token.
    ///
    /// Leading whitespace is skipped; the whitespace byte that ends the token
    /// is left in the input. Returns `None` when input ends before any token
    /// byte is seen. The token is read whole, whatever its length; callers
    /// check the limit.
    pub fn read_token(&mut self) -> io::Result<Option<String>> {
        let mut token = Vec::new();
        loop {
            let buf = match self.input.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut done = false;
            for &c in buf {
                if is_blank(c) {
                    if !token.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    token.push(c);
                }
                used += 1;
            }
            self.input.consume(used);
            if done {
                break;
            }
        }

        if token.is_empty() {
            Ok(None)
        } else {
            Ok(Some(String::from_utf8_lossy(&token).into_owned()))
        }
    }

    /// Drop everything up to and including the next newline.
    pub fn discard_line(&mut self) -> io::Result<()> {
        let mut rest = Vec::new();
        self.input.read_until(b'\n', &mut rest)?;
        Ok(())
    }

    /// Read one line, newline included, into `line` (cleared first).
    /// Returns 0 at end of input.
    pub fn read_line(&mut self, line: &mut Vec<u8>) -> io::Result<usize> {
        line.clear();
        self.input.read_until(b'\n', line)
    }

    /// Copy raw input to `sink` until end of input.
    pub fn copy_to_end(&mut self, sink: &mut dyn Write) -> io::Result<u64> {
        let mut copied = 0;
        let mut chunk = [0u8; 4096];
        loop {
            let n = match self.input.read(&mut chunk) {
                Ok(0) => return Ok(copied),
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            sink.write_all(&chunk[..n])?;
            copied += n as u64;
        }
    }
}
