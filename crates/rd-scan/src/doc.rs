//! Documentation model
//!
//! The in-memory result of parsing one Rd file. Built once by the parser,
//! then handed to rendering; never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Parsed documentation for one Rd file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    /// Selects class-style vs function-style rendering
    pub is_class: bool,
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Raw usage lines, one call signature per line
    pub usage: Option<String>,
    /// Arguments in order of appearance; duplicate names preserved as-is
    pub args: Vec<Argument>,
    pub value: Option<String>,
    pub examples: Option<String>,
    /// Table-of-contents entries for class-style docs
    pub method_links: Vec<MethodLink>,
    /// Method blocks in declaration order
    pub methods: Vec<Method>,
}

/// One `\item{NAME}{DESC}` entry from an `\arguments` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    pub description: String,
}

/// One `\item \href{...}{...}` entry from the method listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodLink {
    pub target: String,
    pub text: String,
}

/// One class-method subsection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    /// Anchor identifier from the preceding `<a id="...">` line
    pub link_name: String,
    /// Display name from the subsection header
    pub method_name: String,
    /// Free-form text before any recognized sub-subsection
    pub preamble: String,
    pub usage: String,
    /// Pre-rendered bullet list built from the `\describe` block
    pub arguments: String,
    pub examples: String,
    pub returns: String,
}
