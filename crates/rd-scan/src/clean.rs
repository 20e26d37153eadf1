//! Inline markup cleaner
//!
//! Rewrites a small fixed set of inline macros into Markdown. Rules are
//! applied most-specific first since the patterns overlap; each rule makes
//! one non-overlapping pass over the whole string. Unrecognized macros are
//! left verbatim.

use once_cell::sync::Lazy;
use regex::Regex;

// \code{\link[=create_experiment]{create_experiment()}}
static CODE_LINK_TARGET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\code\{\\link\[=([^\]]*?)\]\{([^}]*?)\}\}").unwrap());
// \code{\link{LoggedArtifact}}
static CODE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\code\{\\link\{([^}]*?)\}\}").unwrap());
// \link{LoggedArtifact}
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\link\{([^}]*?)\}").unwrap());
// \code{...}
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\code\{([^}]*?)\}").unwrap());

/// Rewrite link and code macros into Markdown inline syntax.
pub fn clean(text: &str) -> String {
    let text = CODE_LINK_TARGET.replace_all(text, "[`$2`](../$1)");
    let text = CODE_LINK.replace_all(&text, "[`$1`](./$1)");
    let text = LINK.replace_all(&text, "[$1](./$1)");
    CODE.replace_all(&text, "`$1`").into_owned()
}

/// Remove every `NAME...}` envelope from `text`, keeping the interior.
///
/// `name` includes the opening brace (e.g. `\dontrun{`). Nested braces
/// inside the envelope are balanced against its closing brace.
pub fn strip_wrapper(name: &str, text: &str) -> String {
    let mut result = String::new();
    let mut current = String::new();
    let mut inside = false;
    let mut depth = 0usize;

    for ch in text.chars() {
        if inside {
            match ch {
                '{' => {
                    depth += 1;
                    current.push(ch);
                }
                '}' => {
                    if depth == 0 {
                        result.push_str(&current);
                        inside = false;
                        current.clear();
                    } else {
                        depth -= 1;
                        current.push(ch);
                    }
                }
                _ => current.push(ch),
            }
        } else {
            current.push(ch);
        }

        if current.ends_with(name) {
            inside = true;
            result.push_str(&current[..current.len() - name.len()]);
            current.clear();
        }
    }

    result.push_str(&current);
    result
}
