//! Parse errors

use thiserror::Error;

/// Errors raised while parsing one Rd document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unbalanced braces: reached end of input inside an open group")]
    UnbalancedBrace,

    #[error("malformed group: expected `{{` or `}}{{` before {context:?}")]
    MalformedGroup { context: String },

    #[error("malformed {section} subsection: missing \\preformatted block")]
    MissingPreformatted { section: String },

    #[error("unknown subsection: {title:?}")]
    UnknownSubsection { title: String },

    #[error("malformed directive line: {line:?}")]
    MalformedDirective { line: String },
}

/// Parse result type
pub type ParseResult<T> = Result<T, ParseError>;
