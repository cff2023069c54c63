use crate::analyzer::ErrorAnalyzer;
use crate::catalog::{Category, ErrorGuideItem, PatternDef, Severity};
use crate::report::Renderer;
use crate::theme::Theme;

mod fixes;
mod report;
mod theme;

// Test utilities and helpers
pub(crate) struct TestUtils;

/// Small catalog for exercising ranking rules without the built-in data.
pub(crate) static CUSTOM_GUIDES: &[ErrorGuideItem] = &[
    ErrorGuideItem {
        id: "widget-failure",
        title: "Widget failure",
        description: "widget broken",
        category: Category::Structure,
        severity: Severity::Low,
        common_causes: &[],
        bad_example: "",
        solution: "",
        tips: &[],
        related_errors: &["frobnicator-overload", "gone"],
    },
    ErrorGuideItem {
        id: "frobnicator-overload",
        title: "Frobnicator overload",
        description: "frobnicator overloaded spinning",
        category: Category::Syntax,
        severity: Severity::High,
        common_causes: &["frobnicator spinning overloaded"],
        bad_example: "",
        solution: "",
        tips: &[],
        related_errors: &[],
    },
];

pub(crate) static CUSTOM_PATTERNS: &[PatternDef] = &[
    PatternDef {
        id: "frobnicator-tie",
        regex: r"frobnicator",
        error_type: "frobnicator-overload",
        confidence: 0.8,
        keywords: &[],
    },
    PatternDef {
        id: "widget-low",
        regex: r"(?i)widget",
        error_type: "widget-failure",
        confidence: 0.6,
        keywords: &["widget"],
    },
    PatternDef {
        id: "widget-orphan",
        regex: r"(?i)widget",
        error_type: "no-such-guide",
        confidence: 0.99,
        keywords: &[],
    },
    PatternDef {
        id: "broken-regex",
        regex: r"(unclosed",
        error_type: "widget-failure",
        confidence: 0.99,
        keywords: &[],
    },
];

impl TestUtils {
    pub fn analyzer() -> ErrorAnalyzer {
        ErrorAnalyzer::new()
    }

    pub fn custom_analyzer() -> ErrorAnalyzer {
        ErrorAnalyzer::with_catalog(CUSTOM_GUIDES, CUSTOM_PATTERNS)
    }

    pub fn plain_renderer(show_examples: bool) -> Renderer {
        colored::control::set_override(false);
        Renderer::new(Theme::monochrome(), show_examples)
    }

    /// Messages produced by common parsers, used for properties that hold for any input.
    pub fn sample_messages() -> Vec<&'static str> {
        vec![
            "Unexpected token , in JSON at position 25",
            "Unexpected end of JSON input",
            "Unexpected token // comment in JSON",
            "Unexpected token u in JSON at position 0",
            "Unexpected token ' in JSON at position 1",
            "Unexpected string in JSON at position 12",
            "Expected property name or '}' in JSON at position 1",
            "Bad control character in string literal in JSON at position 10",
            "JSON.parse: unexpected character at line 1 column 2 of the JSON data",
            "trailing comma at line 1 column 28",
            "EOF while parsing an object at line 1 column 15",
            "key must be a string at line 1 column 2",
            "expected value at line 1 column 1",
            "control character (\\u0000-\\u001F) found while parsing a string at line 2 column 0",
            "a string with a missing closing quote and a trailing comma in the object",
            "",
            "잘못된 JSON 형식입니다",
        ]
    }
}
