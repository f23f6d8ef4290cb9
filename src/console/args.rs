//! Scanner for the operator's input lines.
//!
//! A line is a whitespace-separated sequence of unsigned integers and
//! double-quoted strings, e.g. `12 "Markets close early today"`. Quoted
//! strings understand the escapes `\"`, `\\`, `\n` and `\t`. Trailing text
//! after the last requested value is ignored.

use super::error::ConsoleError;

/// Cursor over one input line.
#[derive(Debug, Clone)]
pub struct Args<'a> {
    rest: &'a str,
}

impl<'a> Args<'a> {
    /// Start scanning `line`.
    pub fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Read an unsigned 32-bit integer.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::InvalidInput`] if the next token is not a number that fits.
    pub fn next_u32(&mut self) -> Result<u32, ConsoleError> {
        self.skip_whitespace();
        let digits = self.rest.strip_prefix('+').unwrap_or(self.rest);
        let sign_len = self.rest.len() - digits.len();
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        if end == 0 {
            return Err(ConsoleError::InvalidInput);
        }
        let value = digits[..end]
            .parse::<u32>()
            .map_err(|_| ConsoleError::InvalidInput)?;
        self.rest = &self.rest[sign_len + end..];
        Ok(value)
    }

    /// Read a double-quoted string and unescape it.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::InvalidInput`] if the next token is not a terminated
    /// quoted string or contains an unknown escape.
    pub fn next_quoted(&mut self) -> Result<String, ConsoleError> {
        self.skip_whitespace();
        let body = self
            .rest
            .strip_prefix('"')
            .ok_or(ConsoleError::InvalidInput)?;

        let mut out = String::new();
        let mut chars = body.char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '"' => {
                    self.rest = &body[i + 1..];
                    return Ok(out);
                }
                '\\' => match chars.next() {
                    Some((_, '"')) => out.push('"'),
                    Some((_, '\\')) => out.push('\\'),
                    Some((_, 'n')) => out.push('\n'),
                    Some((_, 't')) => out.push('\t'),
                    _ => return Err(ConsoleError::InvalidInput),
                },
                c => out.push(c),
            }
        }
        Err(ConsoleError::InvalidInput)
    }

    /// Read the next character without skipping whitespace.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::InvalidInput`] on an exhausted line.
    pub fn next_char(&mut self) -> Result<char, ConsoleError> {
        let mut chars = self.rest.chars();
        let c = chars.next().ok_or(ConsoleError::InvalidInput)?;
        self.rest = chars.as_str();
        Ok(c)
    }
}
