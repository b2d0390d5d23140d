//! Console Streams.
//!
//! The console ports talk to a `Console`: a text input stream and a text
//! output stream. `StdConsole` binds the process stdin/stdout; `BufferConsole`
//! runs against an in-memory input script and captures everything written,
//! which is what the test suites drive.
//!
//! Input scanning follows the conventions of a formatted reader: a character
//! read skips leading whitespace, an integer read skips leading whitespace and
//! then accepts an optional sign followed by decimal digits.

use std::io::{self, BufRead, Cursor, Stdout, StdinLock, Write};

/// A pair of console streams attached to the control ports.
pub trait Console {
    /// Stream the read ports consume.
    fn input(&mut self) -> &mut dyn BufRead;

    /// Stream the write ports and dumps print to.
    fn output(&mut self) -> &mut dyn Write;

    /// Reads one non-whitespace byte; `None` at end of input.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the input stream.
    fn read_char(&mut self) -> io::Result<Option<u8>> {
        let input = self.input();
        skip_whitespace(input)?;
        next_byte(input)
    }

    /// Reads one signed decimal integer; `None` at end of input or when no
    /// digits follow the optional sign.
    ///
    /// Values that overflow 32 bits wrap.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the input stream.
    fn read_int(&mut self) -> io::Result<Option<i32>> {
        let input = self.input();
        skip_whitespace(input)?;

        let negative = match peek_byte(input)? {
            Some(b'-') => {
                input.consume(1);
                true
            }
            Some(b'+') => {
                input.consume(1);
                false
            }
            _ => false,
        };

        let mut value: i32 = 0;
        let mut digits = 0usize;
        while let Some(b) = peek_byte(input)? {
            if !b.is_ascii_digit() {
                break;
            }
            input.consume(1);
            value = value.wrapping_mul(10).wrapping_add(i32::from(b - b'0'));
            digits += 1;
        }

        if digits == 0 {
            return Ok(None);
        }
        Ok(Some(if negative { value.wrapping_neg() } else { value }))
    }
}

fn peek_byte(input: &mut dyn BufRead) -> io::Result<Option<u8>> {
    Ok(input.fill_buf()?.first().copied())
}

fn next_byte(input: &mut dyn BufRead) -> io::Result<Option<u8>> {
    let byte = peek_byte(input)?;
    if byte.is_some() {
        input.consume(1);
    }
    Ok(byte)
}

fn skip_whitespace(input: &mut dyn BufRead) -> io::Result<()> {
    while let Some(b) = peek_byte(input)? {
        if !b.is_ascii_whitespace() && b != 0x0B {
            break;
        }
        input.consume(1);
    }
    Ok(())
}

/// Console bound to the process standard streams.
#[derive(Debug)]
pub struct StdConsole {
    input: StdinLock<'static>,
    output: Stdout,
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl StdConsole {
    /// Locks stdin for the lifetime of the console and attaches stdout.
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl Console for StdConsole {
    fn input(&mut self) -> &mut dyn BufRead {
        &mut self.input
    }

    fn output(&mut self) -> &mut dyn Write {
        &mut self.output
    }
}

/// In-memory console: scripted input, captured output.
#[derive(Clone, Debug, Default)]
pub struct BufferConsole {
    input: Cursor<Vec<u8>>,
    output: Vec<u8>,
}

impl BufferConsole {
    /// Creates a console with no input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console whose input stream yields `input`.
    pub fn with_input(input: impl Into<Vec<u8>>) -> Self {
        Self {
            input: Cursor::new(input.into()),
            output: Vec::new(),
        }
    }

    /// Everything written so far.
    pub fn captured(&self) -> &[u8] {
        &self.output
    }

    /// Everything written so far, decoded lossily as UTF-8.
    pub fn captured_str(&self) -> String {
        String::from_utf8_lossy(self.captured()).into_owned()
    }
}

impl Console for BufferConsole {
    fn input(&mut self) -> &mut dyn BufRead {
        &mut self.input
    }

    fn output(&mut self) -> &mut dyn Write {
        &mut self.output
    }
}
