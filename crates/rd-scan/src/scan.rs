//! Brace scanner
//!
//! Extracts balanced `{...}` groups from a character stream. Callers that
//! are mid-line seed the scanner with the remainder of the current line;
//! once the seed is exhausted the scanner falls back to the stream.

use crate::error::{ParseError, ParseResult};
use crate::source::Source;

/// Extract `count` balanced top-level groups, outer braces excluded.
///
/// A group's buffer begins with the `{` that opened it, except for the
/// second and later groups, whose buffer begins with the `}{` carried over
/// from closing the previous group; the known prefix is trimmed off either
/// way. Anything else means the input is malformed.
pub fn curly_contents(count: usize, seed: &str, source: &mut Source<'_>) -> ParseResult<Vec<String>> {
    let mut groups = Vec::new();
    let mut depth = 0i32;
    let mut current = String::new();
    let mut seed_chars = seed.chars();

    loop {
        let Some(ch) = seed_chars.next().or_else(|| source.next_char()) else {
            return Err(ParseError::UnbalancedBrace);
        };
        if ch == '}' {
            depth -= 1;
            if depth == 0 {
                if let Some(interior) = current.strip_prefix('{') {
                    groups.push(interior.to_string());
                } else if let Some(interior) = current.strip_prefix("}{") {
                    groups.push(interior.to_string());
                } else {
                    return Err(ParseError::MalformedGroup { context: current });
                }
                current.clear();
            }
        } else if ch == '{' {
            depth += 1;
        }
        if groups.len() == count {
            return Ok(groups);
        }
        current.push(ch);
    }
}

/// Extract a single group.
pub fn curly_one(seed: &str, source: &mut Source<'_>) -> ParseResult<String> {
    let mut groups = curly_contents(1, seed, source)?;
    groups.pop().ok_or(ParseError::UnbalancedBrace)
}

/// Extract an `\item{A}{B}`-style pair of groups.
pub fn curly_pair(seed: &str, source: &mut Source<'_>) -> ParseResult<(String, String)> {
    let mut groups = curly_contents(2, seed, source)?;
    let second = groups.pop().ok_or(ParseError::UnbalancedBrace)?;
    let first = groups.pop().ok_or(ParseError::UnbalancedBrace)?;
    Ok((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_group() {
        let mut source = Source::new("");
        assert_eq!(curly_one("{hello}", &mut source).unwrap(), "hello");
    }

    #[test]
    fn test_nesting_preserved_verbatim() {
        let mut source = Source::new("");
        assert_eq!(curly_one("{a {b {c}} d}", &mut source).unwrap(), "a {b {c}} d");
    }

    #[test]
    fn test_pair() {
        let mut source = Source::new("");
        let (name, description) = curly_pair("{x}{First}", &mut source).unwrap();
        assert_eq!(name, "x");
        assert_eq!(description, "First");
    }

    #[test]
    fn test_empty_first_capture() {
        let mut source = Source::new("");
        let (first, second) = curly_pair("{}{only}", &mut source).unwrap();
        assert_eq!(first, "");
        assert_eq!(second, "only");
    }

    #[test]
    fn test_seed_then_stream() {
        let mut source = Source::new(" end}");
        assert_eq!(curly_one("{start", &mut source).unwrap(), "start end");
    }

    #[test]
    fn test_nested_macro_in_group() {
        let mut source = Source::new("");
        let (name, description) =
            curly_pair("{workspace}{see \\code{\\link{Workspace}}}", &mut source).unwrap();
        assert_eq!(name, "workspace");
        assert_eq!(description, "see \\code{\\link{Workspace}}");
    }

    #[test]
    fn test_unbalanced_is_an_error() {
        let mut source = Source::new("");
        let err = curly_one("{never closed", &mut source).unwrap_err();
        assert!(matches!(err, ParseError::UnbalancedBrace));
    }

    #[test]
    fn test_group_not_opening_with_brace_is_malformed() {
        let mut source = Source::new("");
        let err = curly_one("a{x}", &mut source).unwrap_err();
        assert!(matches!(err, ParseError::MalformedGroup { .. }));
    }
}
