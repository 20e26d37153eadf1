//! Section parser
//!
//! Line-driven state machine over the top-level document. Each line is
//! classified into a directive and dispatched to the brace scanner or a
//! specialized sub-parser; method markers hand control to the token-driven
//! method block parser.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::clean::{clean, strip_wrapper};
use crate::doc::{Argument, Documentation, Method, MethodLink};
use crate::error::{ParseError, ParseResult};
use crate::method::parse_method;
use crate::scan::{curly_one, curly_pair};
use crate::source::Source;

/// Content between the first `{` and the last `}` on a single line
static BRACE_SPAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(.*)\}").unwrap());

const METHOD_MARKER: &str = "\\if{html}{\\out{<hr>}}";
const ANCHOR_PREFIX: &str = "\\if{html}{\\out{<a id=\"";
const ANCHOR_SUFFIX: &str = "\"></a>}}";

/// Parser configuration
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Trace recognized directives on stderr
    pub verbose: bool,
}

/// One top-level line, classified.
///
/// Variants are checked in a fixed precedence; anything unrecognized falls
/// through to [`Directive::Other`] and is ignored.
#[derive(Debug)]
enum Directive<'a> {
    Comment,
    Name(&'a str),
    Title(&'a str),
    Usage,
    Description { rest: &'a str },
    Value { rest: &'a str },
    Examples { rest: &'a str },
    MethodMarker,
    MethodLink { body: &'a str },
    Arguments,
    Other,
}

impl<'a> Directive<'a> {
    fn classify(line: &'a str) -> ParseResult<Self> {
        if line.starts_with('%') {
            Ok(Directive::Comment)
        } else if line.starts_with("\\name{") {
            Ok(Directive::Name(line))
        } else if line.starts_with("\\title{") {
            Ok(Directive::Title(line))
        } else if line.starts_with("\\usage{") {
            Ok(Directive::Usage)
        } else if line.starts_with("\\description{") {
            Ok(Directive::Description {
                rest: &line["\\description".len()..],
            })
        } else if line.starts_with("\\value{") {
            Ok(Directive::Value {
                rest: &line["\\value".len()..],
            })
        } else if line.starts_with("\\examples{") {
            Ok(Directive::Examples {
                rest: &line["\\examples".len()..],
            })
        } else if line == METHOD_MARKER {
            Ok(Directive::MethodMarker)
        } else if line.starts_with("\\item \\href") {
            // \item \href{TARGET}{\code{TEXT}} minus the fixed framing
            let body = line
                .len()
                .checked_sub(2)
                .and_then(|end| line.get("\\item \\href{".len()..end))
                .ok_or_else(|| ParseError::MalformedDirective {
                    line: line.to_string(),
                })?;
            Ok(Directive::MethodLink { body })
        } else if line.starts_with("\\arguments{") {
            Ok(Directive::Arguments)
        } else {
            Ok(Directive::Other)
        }
    }
}

/// Parse one Rd document.
///
/// `is_class` selects class-style parsing/rendering and is supplied by the
/// caller (typically derived from a filename convention), never inferred
/// from content.
pub fn parse(input: &str, is_class: bool) -> ParseResult<Documentation> {
    parse_with_options(input, is_class, ParseOptions::default())
}

/// Parse one Rd document with explicit options.
pub fn parse_with_options(
    input: &str,
    is_class: bool,
    options: ParseOptions,
) -> ParseResult<Documentation> {
    Parser::new(input, is_class, options).parse()
}

/// Line-driven parser state.
///
/// Fields accumulate during the scan; [`Parser::parse`] consumes the parser
/// and produces one immutable [`Documentation`] at end of input.
pub struct Parser<'a> {
    source: Source<'a>,
    options: ParseOptions,
    is_class: bool,
    name: Option<String>,
    title: Option<String>,
    description: Option<String>,
    usage: Option<String>,
    value: Option<String>,
    examples: Option<String>,
    args: Vec<Argument>,
    method_links: Vec<MethodLink>,
    methods: Vec<Method>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, is_class: bool, options: ParseOptions) -> Self {
        Self {
            source: Source::new(input),
            options,
            is_class,
            name: None,
            title: None,
            description: None,
            usage: None,
            value: None,
            examples: None,
            args: Vec::new(),
            method_links: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn parse(mut self) -> ParseResult<Documentation> {
        while let Some(raw) = self.source.next_line() {
            let line = raw.trim_end();
            match Directive::classify(line)? {
                Directive::Comment | Directive::Other => {}
                Directive::Name(line) => {
                    if self.options.verbose {
                        eprintln!("{line}");
                    }
                    self.name = Some(brace_span(line)?);
                }
                Directive::Title(line) => {
                    self.title = Some(brace_span(line)?);
                }
                Directive::Usage => {
                    self.usage = Some(self.read_usage()?);
                }
                Directive::Description { rest } => {
                    let text = curly_one(rest, &mut self.source)?;
                    self.description = Some(clean(&text));
                }
                Directive::Value { rest } => {
                    let text = curly_one(rest, &mut self.source)?;
                    self.value = Some(clean(&text));
                }
                Directive::Examples { rest } => {
                    let text = curly_one(rest, &mut self.source)?;
                    self.examples = Some(strip_wrapper("\\dontrun{", &text).trim().to_string());
                }
                Directive::MethodMarker => {
                    self.read_method()?;
                }
                Directive::MethodLink { body } => {
                    let (target, text) =
                        body.split_once("}{")
                            .ok_or_else(|| ParseError::MalformedDirective {
                                line: line.to_string(),
                            })?;
                    self.method_links.push(MethodLink {
                        target: target.to_string(),
                        text: text.replace("\\code{", ""),
                    });
                }
                Directive::Arguments => {
                    self.read_arguments()?;
                }
            }
        }

        Ok(Documentation {
            is_class: self.is_class,
            name: self.name,
            title: self.title,
            description: self.description,
            usage: self.usage,
            args: self.args,
            value: self.value,
            examples: self.examples,
            method_links: self.method_links,
            methods: self.methods,
        })
    }

    /// Collect raw usage lines verbatim until a line equal to `}`.
    fn read_usage(&mut self) -> ParseResult<String> {
        let mut usage = String::new();
        loop {
            let Some(raw) = self.source.next_line() else {
                return Err(ParseError::UnbalancedBrace);
            };
            let line = raw.trim_end();
            if line == "}" {
                return Ok(usage);
            }
            usage.push_str(line);
            usage.push('\n');
        }
    }

    /// Collect `\item{NAME}{DESC}` pairs until a line equal to `}`.
    fn read_arguments(&mut self) -> ParseResult<()> {
        loop {
            let Some(raw) = self.source.next_line() else {
                return Err(ParseError::UnbalancedBrace);
            };
            let line = raw.trim_end();
            if line == "}" {
                return Ok(());
            }
            if let Some(rest) = line.strip_prefix("\\item")
                && rest.starts_with('{')
            {
                // The stripped line terminator becomes a space so a
                // description continuing on the next line stays separated.
                let seed = format!("{rest} ");
                let (name, description) = curly_pair(&seed, &mut self.source)?;
                self.args.push(Argument {
                    name,
                    description: clean(&description.replace('\n', " ")),
                });
            }
        }
    }

    /// Handle a method marker: anchor line, divider line, then the block.
    fn read_method(&mut self) -> ParseResult<()> {
        let anchor = self
            .source
            .next_line()
            .ok_or(ParseError::UnbalancedBrace)?
            .trim();
        let link_name = anchor
            .strip_prefix(ANCHOR_PREFIX)
            .and_then(|s| s.strip_suffix(ANCHOR_SUFFIX))
            .ok_or_else(|| ParseError::MalformedDirective {
                line: anchor.to_string(),
            })?;
        let _divider = self.source.next_line().ok_or(ParseError::UnbalancedBrace)?;
        let method = parse_method(&mut self.source, link_name, &self.options)?;
        self.methods.push(method);
        Ok(())
    }
}

fn brace_span(line: &str) -> ParseResult<String> {
    BRACE_SPAN_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ParseError::MalformedDirective {
            line: line.to_string(),
        })
}
