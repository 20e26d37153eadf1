//! Rd text tokenizer
//!
//! Flattens a text span into a token sequence where `{`, `}` and `\` are
//! individual tokens and everything else is coalesced into literal runs.
//! The method block parser walks this sequence positionally instead of
//! re-scanning characters.

/// A token in an Rd text span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Opening brace ({)
    OpenBrace,
    /// Closing brace (})
    CloseBrace,
    /// Backslash introducing a macro (\)
    Backslash,
    /// Run of literal text, never empty
    Text(&'a str),
}

impl Token<'_> {
    /// The exact text this token covers
    pub fn as_str(&self) -> &str {
        match self {
            Token::OpenBrace => "{",
            Token::CloseBrace => "}",
            Token::Backslash => "\\",
            Token::Text(s) => s,
        }
    }
}

/// Tokenize a text span.
///
/// Concatenating `as_str` over the result reproduces the input exactly.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (i, ch) in text.char_indices() {
        let token = match ch {
            '{' => Token::OpenBrace,
            '}' => Token::CloseBrace,
            '\\' => Token::Backslash,
            _ => continue,
        };
        if start < i {
            tokens.push(Token::Text(&text[start..i]));
        }
        tokens.push(token);
        start = i + 1;
    }
    if start < text.len() {
        tokens.push(Token::Text(&text[start..]));
    }
    tokens
}
