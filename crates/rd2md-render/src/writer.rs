//! Documentation to Markdown writer

use rd_scan::{Documentation, Method};

/// Render a parsed document as Markdown.
pub fn render(doc: &Documentation) -> String {
    let mut writer = Writer::default();
    if doc.is_class {
        writer.class_doc(doc);
    } else {
        writer.function_doc(doc);
    }
    writer.finish()
}

/// Markdown writer state
#[derive(Default)]
struct Writer {
    out: String,
}

impl Writer {
    fn finish(self) -> String {
        self.out
    }

    fn section(&mut self, title: &str) {
        self.out.push_str("## ");
        self.out.push_str(title);
        self.out.push_str("\n\n");
    }

    fn paragraph(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push_str("\n\n");
    }

    /// Fenced block for code that already carries its trailing newline.
    fn fenced_raw(&mut self, code: &str) {
        self.out.push_str("```r\n");
        self.out.push_str(code);
        self.out.push_str("```\n\n");
    }

    /// Fenced block for code without a trailing newline.
    fn fenced(&mut self, code: &str) {
        self.out.push_str("```r\n");
        self.out.push_str(code);
        self.out.push_str("\n```\n\n");
    }

    fn function_doc(&mut self, doc: &Documentation) {
        if let Some(name) = present(&doc.name) {
            self.paragraph(&format!("# `{name}`"));
        }
        if let Some(title) = present(&doc.title) {
            self.paragraph(title);
        }
        if let Some(description) = present(&doc.description) {
            self.section("Description");
            self.paragraph(description);
        }
        if let Some(usage) = present(&doc.usage) {
            self.section("Usage");
            self.fenced_raw(usage);
        }
        if !doc.args.is_empty() {
            self.section("Arguments");
            self.out.push_str("Argument      |Description\n");
            self.out.push_str("------------- |----------------\n");
            for arg in &doc.args {
                self.out
                    .push_str(&format!("`{}` | {}\n", arg.name, arg.description));
            }
            self.out.push('\n');
        }
        if let Some(value) = present(&doc.value) {
            self.section("Return Value");
            self.paragraph(value);
        }
        if let Some(examples) = present(&doc.examples) {
            self.section("Examples");
            self.fenced(examples);
        }
    }

    fn class_doc(&mut self, doc: &Documentation) {
        if let Some(description) = present(&doc.description) {
            self.section("Description");
            self.paragraph(description);
        }
        if let Some(examples) = present(&doc.examples) {
            self.section("Examples");
            self.fenced(examples);
        }
        if !doc.method_links.is_empty() {
            self.section("Methods");
            self.out.push_str("### Public Methods\n\n");
            for link in &doc.method_links {
                self.out
                    .push_str(&format!("* [`{}`]({})\n", link.text, link.target));
            }
            self.out.push('\n');
        }
        for method in &doc.methods {
            self.method(method);
        }
    }

    fn method(&mut self, method: &Method) {
        self.out
            .push_str(&format!("<a id=\"{}\"></a>\n", method.link_name));
        self.out.push_str(&format!("### {}\n\n", method.method_name));
        if !method.preamble.is_empty() {
            self.paragraph(&method.preamble);
        }
        if !method.usage.is_empty() {
            self.out.push_str("<b>Usage</b>\n\n");
            self.fenced(&method.usage);
        }
        if !method.arguments.is_empty() {
            self.out.push_str("<b>Arguments:</b>\n\n");
            self.paragraph(&method.arguments);
        }
        if !method.examples.is_empty() {
            self.out.push_str("<b>Example:</b>\n\n");
            self.fenced(&method.examples);
        }
        if !method.returns.is_empty() {
            self.out.push_str("<b>Returns:</b>\n\n");
            self.paragraph(&method.returns);
        }
    }
}

/// Empty strings render as absent, matching the truthiness of the model.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
