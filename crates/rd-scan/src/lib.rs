//! rd-scan: parser for Rd (R documentation) markup
//!
//! This crate provides:
//! - A brace scanner for balanced `{...}` groups
//! - An inline markup cleaner (cross-reference links, code spans)
//! - A tokenizer splitting text into `{`, `}`, `\` and literal runs
//! - A line-driven section parser producing a [`Documentation`] value
//!
//! # Example
//!
//! ```
//! use rd_scan::parse;
//!
//! let source = "\\name{example}\n\\title{An example}\n";
//! let doc = parse(source, false).unwrap();
//! assert_eq!(doc.name.as_deref(), Some("example"));
//! assert_eq!(doc.title.as_deref(), Some("An example"));
//! ```

pub mod clean;
pub mod doc;
pub mod error;
pub mod method;
pub mod parser;
pub mod scan;
pub mod source;
pub mod token;

// Re-export main types for convenient access
pub use doc::{Argument, Documentation, Method, MethodLink};
pub use error::{ParseError, ParseResult};
pub use parser::{parse, parse_with_options, ParseOptions, Parser};
pub use source::Source;
pub use token::{tokenize, Token};
