use regex::Regex;
use std::sync::LazyLock;

static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*[}\]])").expect("valid regex"));

static BARE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\s*)([a-zA-Z_][a-zA-Z0-9_]*):").expect("valid regex"));

/// Rewrite `content` for the given error type, if a mechanical rewrite exists.
///
/// The rewrites are textual and deliberately simple. They do not parse the
/// document, so they can touch text inside string values.
pub fn suggest_fix(error_type: &str, content: &str) -> Option<String> {
    match error_type {
        "trailing-comma" => Some(remove_trailing_commas(content)),
        "invalid-string" => Some(escape_bare_quotes(content)),
        "invalid-property" => Some(quote_bare_keys(content)),
        _ => None,
    }
}

pub fn remove_trailing_commas(content: &str) -> String {
    TRAILING_COMMA.replace_all(content, "$1").into_owned()
}

/// Prefix every `"` that does not already follow a backslash with one.
pub fn escape_bare_quotes(content: &str) -> String {
    let mut fixed = String::with_capacity(content.len() + 8);
    let mut previous = None;

    for c in content.chars() {
        if c == '"' && previous != Some('\\') {
            fixed.push('\\');
        }
        fixed.push(c);
        previous = Some(c);
    }

    fixed
}

pub fn quote_bare_keys(content: &str) -> String {
    BARE_KEY.replace_all(content, "${1}\"${2}\":").into_owned()
}
