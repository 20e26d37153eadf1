//! Character/line source over an input document
//!
//! A single cursor serves both the line-driven section parser and the
//! character-driven brace scanner, so a directive can start on one line
//! and finish mid-stream without losing position.

/// Cursor over the input text.
pub struct Source<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Source<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Consume and return the next line, without its terminator.
    ///
    /// Returns `None` at end of input. A trailing `\r` is left in place;
    /// callers that need it gone use `trim_end`.
    pub fn next_line(&mut self) -> Option<&'a str> {
        if self.pos >= self.input.len() {
            return None;
        }
        let rest = &self.input[self.pos..];
        match rest.find('\n') {
            Some(i) => {
                self.pos += i + 1;
                Some(&rest[..i])
            }
            None => {
                self.pos = self.input.len();
                Some(rest)
            }
        }
    }

    /// Consume and return the next character.
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.input[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }
}
