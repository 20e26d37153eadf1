//! Method block parser
//!
//! Parses one class-method subsection. The whole subsection body is first
//! captured as a single span by tracking brace depth character by
//! character, then cleaned, tokenized and walked with an explicit position
//! cursor to pick out the Usage/Arguments/Examples/Returns sub-subsections
//! and the `\describe` argument list.

use crate::clean::{clean, strip_wrapper};
use crate::doc::Method;
use crate::error::{ParseError, ParseResult};
use crate::parser::ParseOptions;
use crate::scan::curly_pair;
use crate::source::Source;
use crate::token::{tokenize, Token};

const DIV_CLOSE: &str = "\\if{html}{\\out{</div>}}";

/// Parse one method block, with `source` positioned on its header line
/// (`\subsection{Method \code{NAME()}}{`).
pub fn parse_method(
    source: &mut Source<'_>,
    link_name: &str,
    options: &ParseOptions,
) -> ParseResult<Method> {
    let header = source.next_line().ok_or(ParseError::UnbalancedBrace)?.trim();
    let name_span = header
        .strip_prefix("\\subsection{")
        .and_then(|s| s.strip_suffix("}{"))
        .ok_or_else(|| ParseError::MalformedDirective {
            line: header.to_string(),
        })?;
    let method_name = clean(name_span);
    if options.verbose {
        eprintln!("method: {method_name}");
    }

    // Capture the subsection body as one span, nested braces included.
    // Depth starts at 1 for the brace the header line just opened; the
    // matching closing brace is consumed but not kept.
    let mut depth = 1usize;
    let mut body = String::new();
    loop {
        let ch = source.next_char().ok_or(ParseError::UnbalancedBrace)?;
        if ch == '{' {
            depth += 1;
        } else if ch == '}' {
            depth -= 1;
            if depth == 0 {
                break;
            }
        }
        body.push(ch);
    }

    let cleaned = clean(&body);
    let tokens = tokenize(&cleaned);

    let mut preamble = String::new();
    let mut in_preamble = true;
    let mut usage = String::new();
    let mut arguments = String::new();
    let mut examples = String::new();
    let mut returns = String::new();

    let mut pos = 0;
    while pos < tokens.len() {
        match tokens[pos] {
            Token::Backslash => match tokens.get(pos + 1).map(Token::as_str) {
                Some("subsection") => {
                    in_preamble = false;
                    // Layout: \ subsection { Title } { body... }
                    let title = tokens
                        .get(pos + 3)
                        .map(Token::as_str)
                        .ok_or(ParseError::UnbalancedBrace)?;
                    match title {
                        "Usage" => {
                            let (end, span) = balanced_span(&tokens, pos + 5)?;
                            pos = end;
                            usage = unwrap_preformatted(&span, "usage")?;
                        }
                        // Method arguments come from the sibling \describe
                        // block; the cursor drops into the subsection body
                        // so that block is still found.
                        "Arguments" => pos += 5,
                        "Examples" => {
                            let (end, span) = balanced_span(&tokens, pos + 5)?;
                            pos = end;
                            let code = unwrap_preformatted(&span, "examples")?;
                            examples = strip_wrapper("\\dontrun{", &code).trim().to_string();
                        }
                        "Returns" => {
                            let (end, span) = balanced_span(&tokens, pos + 5)?;
                            pos = end;
                            returns = span;
                        }
                        other => {
                            return Err(ParseError::UnknownSubsection {
                                title: other.to_string(),
                            });
                        }
                    }
                }
                Some("describe") => {
                    let (end, span) = balanced_span(&tokens, pos + 2)?;
                    pos = end;
                    arguments = describe_items(&span)?;
                }
                _ => pos += 1,
            },
            token => {
                if in_preamble {
                    preamble.push_str(token.as_str());
                }
                pos += 1;
            }
        }
    }

    Ok(Method {
        link_name: link_name.to_string(),
        method_name,
        preamble,
        usage,
        arguments,
        examples,
        returns,
    })
}

/// Walk tokens from `start` until brace depth returns to zero; returns the
/// index of the closing token and the interior text (outer braces excluded).
fn balanced_span(tokens: &[Token<'_>], start: usize) -> ParseResult<(usize, String)> {
    let mut depth = 0i32;
    let mut pos = start;
    let mut text = String::new();
    loop {
        let token = tokens.get(pos).ok_or(ParseError::UnbalancedBrace)?;
        text.push_str(token.as_str());
        match token {
            Token::OpenBrace => depth += 1,
            Token::CloseBrace => depth -= 1,
            _ => {}
        }
        if depth == 0 {
            break;
        }
        pos += 1;
    }
    if text.len() < 2 || !text.starts_with('{') || !text.ends_with('}') {
        return Err(ParseError::MalformedGroup { context: text });
    }
    let interior = text[1..text.len() - 1].to_string();
    Ok((pos, interior))
}

/// Pull the code out of a `\preformatted{...}` envelope, dropping the
/// trailing html marker roxygen emits alongside it.
fn unwrap_preformatted(span: &str, section: &str) -> ParseResult<String> {
    let span = span.replace(DIV_CLOSE, "");
    let start = span
        .rfind("preformatted{")
        .map(|i| i + "preformatted{".len())
        .ok_or_else(|| ParseError::MissingPreformatted {
            section: section.to_string(),
        })?;
    let end = span
        .rfind('}')
        .filter(|&end| end >= start)
        .ok_or_else(|| ParseError::MissingPreformatted {
            section: section.to_string(),
        })?;
    Ok(span[start..end].to_string())
}

/// Render the `\item{ARG}{DESC}` pairs of a `\describe` block as bullets.
fn describe_items(span: &str) -> ParseResult<String> {
    let mut source = Source::new(span);
    let mut bullets = String::new();
    while let Some(line) = source.next_line() {
        if let Some(rest) = line.strip_prefix("\\item")
            && rest.starts_with('{')
        {
            let seed = format!("{rest}\n");
            let (name, description) = curly_pair(&seed, &mut source)?;
            bullets.push_str(&format!("* {} {}\n", name, description.replace('\n', " ")));
        }
    }
    Ok(bullets)
}
