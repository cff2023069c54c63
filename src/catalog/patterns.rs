/// Source form of an error pattern. Compiled by the analyzer at construction.
#[derive(Debug, Clone, Copy)]
pub struct PatternDef {
    pub id: &'static str,
    pub regex: &'static str,
    pub error_type: &'static str,
    pub confidence: f64,
    pub keywords: &'static [&'static str],
}

// Specific patterns come before the generic ones: equal confidences keep catalog order.
pub static PATTERNS: &[PatternDef] = &[
    // Trailing commas
    PatternDef {
        id: "trailing-comma-explicit",
        regex: r"(?i)\btrailing comma\b",
        error_type: "trailing-comma",
        confidence: 0.95,
        keywords: &["trailing", "comma"],
    },
    PatternDef {
        id: "trailing-comma-token",
        regex: r"(?i)unexpected token\s*'?,",
        error_type: "trailing-comma",
        confidence: 0.9,
        keywords: &["unexpected", "token", "comma"],
    },
    PatternDef {
        id: "trailing-comma-closing",
        regex: r"(?i)unexpected token\s*'?[}\]]",
        error_type: "trailing-comma",
        confidence: 0.75,
        keywords: &["unexpected", "brace", "bracket"],
    },
    PatternDef {
        id: "closing-bracket-mismatch",
        regex: r"(?i)unexpected token\s*'?[}\]]",
        error_type: "mismatched-brackets",
        confidence: 0.7,
        keywords: &["brace", "bracket", "closing"],
    },
    // Property names
    PatternDef {
        id: "key-must-be-string",
        regex: r"(?i)key must be a string",
        error_type: "invalid-property",
        confidence: 0.9,
        keywords: &["key", "string"],
    },
    PatternDef {
        id: "expected-property-name",
        regex: r"(?i)expected (double-quoted )?property name",
        error_type: "invalid-property",
        confidence: 0.85,
        keywords: &["property", "name", "quoted"],
    },
    PatternDef {
        id: "property-name-after-comma",
        regex: r"(?i)expected (double-quoted )?property name",
        error_type: "trailing-comma",
        confidence: 0.7,
        keywords: &["property", "comma"],
    },
    PatternDef {
        id: "expected-colon",
        regex: r"(?i)expected\s+[`']?:[`']?",
        error_type: "invalid-property",
        confidence: 0.65,
        keywords: &["colon", "property"],
    },
    // Truncated input
    PatternDef {
        id: "unexpected-end-of-input",
        regex: r"(?i)unexpected end of (json )?input",
        error_type: "unexpected-end",
        confidence: 0.95,
        keywords: &["end", "input"],
    },
    PatternDef {
        id: "eof-while-parsing",
        regex: r"(?i)\beof while parsing\b",
        error_type: "unexpected-end",
        confidence: 0.95,
        keywords: &["eof", "parsing"],
    },
    PatternDef {
        id: "end-of-data",
        regex: r"(?i)end of data",
        error_type: "unexpected-end",
        confidence: 0.9,
        keywords: &["end", "data"],
    },
    // Strings
    PatternDef {
        id: "unterminated-string",
        regex: r"(?i)unterminated string",
        error_type: "invalid-string",
        confidence: 0.9,
        keywords: &["unterminated", "string"],
    },
    PatternDef {
        id: "eof-in-string",
        regex: r"(?i)eof while parsing a string",
        error_type: "invalid-string",
        confidence: 0.75,
        keywords: &["eof", "string"],
    },
    PatternDef {
        id: "single-quote-token",
        regex: r"(?i)unexpected token\s*'('|\s|$)",
        error_type: "single-quotes",
        confidence: 0.9,
        keywords: &["quote", "single"],
    },
    // Separators
    PatternDef {
        id: "expected-comma",
        regex: r"(?i)expected\s+[`']?,[`']?\s+or\s+[`']?[}\]]",
        error_type: "missing-comma",
        confidence: 0.85,
        keywords: &["expected", "comma"],
    },
    PatternDef {
        id: "unexpected-string-or-number",
        regex: r"(?i)unexpected (string|number)( in json|\b)",
        error_type: "missing-comma",
        confidence: 0.6,
        keywords: &["unexpected", "string", "number"],
    },
    // JavaScript-only syntax
    PatternDef {
        id: "comment-token",
        regex: r"(?i)unexpected token\s*'?/",
        error_type: "comments-not-allowed",
        confidence: 0.9,
        keywords: &["comment", "slash"],
    },
    PatternDef {
        id: "comment-mention",
        regex: r"(?i)\bcomments?\b",
        error_type: "comments-not-allowed",
        confidence: 0.7,
        keywords: &["comment"],
    },
    PatternDef {
        id: "undefined-token",
        regex: r"(?i)unexpected token\s*'?u'?(\s|,|$)",
        error_type: "undefined-value",
        confidence: 0.9,
        keywords: &["undefined"],
    },
    PatternDef {
        id: "undefined-literal",
        regex: r"(?i)\bundefined\b",
        error_type: "undefined-value",
        confidence: 0.85,
        keywords: &["undefined"],
    },
    PatternDef {
        id: "expected-ident",
        regex: r"(?i)expected ident",
        error_type: "undefined-value",
        confidence: 0.8,
        keywords: &["ident", "literal"],
    },
    // Numbers
    PatternDef {
        id: "invalid-number",
        regex: r"(?i)invalid number|number out of range|no number after minus sign|exponent part is missing|unterminated fractional number",
        error_type: "invalid-number",
        confidence: 0.9,
        keywords: &["number", "numeric"],
    },
    PatternDef {
        id: "nan-or-infinity",
        regex: r"(?i)\b(nan|infinity)\b",
        error_type: "invalid-number",
        confidence: 0.85,
        keywords: &["nan", "infinity"],
    },
    // Escapes and encoding
    PatternDef {
        id: "control-character",
        regex: r"(?i)bad control character|control character .*found while parsing a string",
        error_type: "control-character",
        confidence: 0.95,
        keywords: &["control", "character"],
    },
    PatternDef {
        id: "invalid-escape",
        regex: r"(?i)bad (escaped character|unicode escape)|invalid escape|invalid unicode code point|hex escape|lone leading surrogate",
        error_type: "invalid-escape",
        confidence: 0.9,
        keywords: &["escape", "backslash", "unicode"],
    },
    PatternDef {
        id: "encoding",
        regex: r"(?i)byte order mark|\bbom\b|invalid utf-?8|did not contain valid utf-?8|\x{FEFF}",
        error_type: "encoding-error",
        confidence: 0.9,
        keywords: &["utf-8", "bom", "encoding"],
    },
    // Document structure
    PatternDef {
        id: "trailing-characters",
        regex: r"(?i)trailing characters|unexpected non-whitespace character after json",
        error_type: "trailing-characters",
        confidence: 0.9,
        keywords: &["trailing", "characters"],
    },
    PatternDef {
        id: "duplicate-key",
        regex: r"(?i)duplicate (key|field)",
        error_type: "duplicate-keys",
        confidence: 0.9,
        keywords: &["duplicate", "key"],
    },
    PatternDef {
        id: "recursion-limit",
        regex: r"(?i)recursion limit|maximum call stack|too deeply nested|nesting depth",
        error_type: "nesting-depth",
        confidence: 0.9,
        keywords: &["recursion", "depth", "nested"],
    },
    // Generic fallbacks
    PatternDef {
        id: "html-response",
        regex: r"(?i)unexpected token\s*'?<",
        error_type: "unexpected-token",
        confidence: 0.9,
        keywords: &["html", "doctype"],
    },
    PatternDef {
        id: "unexpected-character",
        regex: r"(?i)unexpected character",
        error_type: "unexpected-token",
        confidence: 0.8,
        keywords: &["unexpected", "character"],
    },
    PatternDef {
        id: "expected-value",
        regex: r"(?i)expected value",
        error_type: "unexpected-token",
        confidence: 0.75,
        keywords: &["expected", "value"],
    },
    PatternDef {
        id: "unexpected-token",
        regex: r"(?i)unexpected token",
        error_type: "unexpected-token",
        confidence: 0.85,
        keywords: &["unexpected", "token"],
    },
];
