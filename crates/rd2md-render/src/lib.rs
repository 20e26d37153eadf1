//! rd2md-render: Markdown output for parsed Rd documentation
//!
//! Walks a [`rd_scan::Documentation`] and emits Markdown, in
//! function-style or class-style layout depending on how the document
//! was parsed.

pub mod writer;

pub use writer::render;
