//! Diagnosis of JSON parser error messages.
//!
//! Two independent passes feed the result list. The pattern pass tests the
//! message against every regex in the pattern catalog and reports the authored
//! confidence of each hit. The keyword pass scores every guide by how many of
//! its words occur in the message. Results from both passes are concatenated
//! (patterns first) and stable-sorted by confidence, so ties keep that order.

use crate::catalog::{Category, ErrorGuideItem, PatternDef, GUIDES, PATTERNS};
use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace, warn};

mod fix;

pub use fix::{escape_bare_quotes, quote_bare_keys, remove_trailing_commas, suggest_fix};

/// `matched_pattern` value for results produced by the keyword pass.
pub const KEYWORD_ANALYSIS: &str = "keyword-analysis";

const KEYWORD_CONFIDENCE_CAP: f64 = 0.8;
const KEYWORD_THRESHOLD: f64 = 0.2;
const TEXT_WORD_WEIGHT: f64 = 0.1;
const CAUSE_WORD_WEIGHT: f64 = 0.15;
const MIN_WORD_CHARS: usize = 3;

/// A compiled pattern from the catalog.
#[derive(Debug, Clone)]
pub struct ErrorPattern {
    pub id: &'static str,
    pub regex: Regex,
    pub error_type: &'static str,
    pub confidence: f64,
    /// Carried with the pattern but not used for matching.
    pub keywords: &'static [&'static str],
}

impl ErrorPattern {
    pub fn compile(def: &PatternDef) -> Result<Self, regex::Error> {
        Ok(Self {
            id: def.id,
            regex: Regex::new(def.regex)?,
            error_type: def.error_type,
            confidence: def.confidence,
            keywords: def.keywords,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMatch {
    pub error_guide: &'static ErrorGuideItem,
    pub confidence: f64,
    /// Pattern id, or [`KEYWORD_ANALYSIS`].
    pub matched_pattern: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
}

impl ErrorMatch {
    pub fn is_keyword_match(&self) -> bool {
        self.matched_pattern == KEYWORD_ANALYSIS
    }
}

/// Matches error messages against the guide and pattern catalogs.
///
/// Holds no mutable state after construction; share one instance freely.
#[derive(Debug, Clone)]
pub struct ErrorAnalyzer {
    guides: &'static [ErrorGuideItem],
    patterns: Vec<ErrorPattern>,
}

impl Default for ErrorAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorAnalyzer {
    /// Analyzer over the built-in catalogs.
    pub fn new() -> Self {
        Self::with_catalog(GUIDES, PATTERNS)
    }

    /// Analyzer over custom catalogs. Patterns whose regex fails to compile are
    /// dropped with a warning.
    pub fn with_catalog(guides: &'static [ErrorGuideItem], patterns: &[PatternDef]) -> Self {
        let patterns: Vec<ErrorPattern> = patterns
            .iter()
            .filter_map(|def| match ErrorPattern::compile(def) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!(pattern = def.id, error = %e, "skipping pattern with invalid regex");
                    None
                }
            })
            .collect();

        debug!(
            guides = guides.len(),
            patterns = patterns.len(),
            "error analyzer ready"
        );

        Self { guides, patterns }
    }

    pub fn patterns(&self) -> &[ErrorPattern] {
        &self.patterns
    }

    /// Rank the catalog entries that could explain `error_message`.
    ///
    /// `json_content` is the document that failed to parse; when given, matches
    /// whose error type has a mechanical rewrite carry a `suggested_fix`.
    /// An empty list means no diagnosis.
    pub fn analyze_error(&self, error_message: &str, json_content: Option<&str>) -> Vec<ErrorMatch> {
        let mut results = self.pattern_matches(error_message, json_content);
        results.extend(self.keyword_matches(error_message));

        // `sort_by` is stable: pattern hits stay ahead of keyword hits on ties.
        results.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        debug!(matches = results.len(), "analyzed error message");
        results
    }

    fn pattern_matches(&self, error_message: &str, json_content: Option<&str>) -> Vec<ErrorMatch> {
        let mut results = Vec::new();

        for pattern in &self.patterns {
            if !pattern.regex.is_match(error_message) {
                continue;
            }

            let Some(guide) = self.error_guide_by_id(pattern.error_type) else {
                trace!(
                    pattern = pattern.id,
                    error_type = pattern.error_type,
                    "pattern matched but its error type has no guide"
                );
                continue;
            };

            trace!(pattern = pattern.id, "pattern matched");
            results.push(ErrorMatch {
                error_guide: guide,
                confidence: pattern.confidence,
                matched_pattern: pattern.id,
                matched_keywords: None,
                suggested_fix: json_content
                    .and_then(|content| suggest_fix(pattern.error_type, content)),
            });
        }

        results
    }

    fn keyword_matches(&self, error_message: &str) -> Vec<ErrorMatch> {
        let message = error_message.to_lowercase();
        let mut results = Vec::new();

        for guide in self.guides {
            let mut score = 0.0;
            let mut matched_keywords = Vec::new();

            let text = format!("{} {}", guide.title, guide.description).to_lowercase();
            for word in matching_words(&text, &message) {
                score += TEXT_WORD_WEIGHT;
                matched_keywords.push(word.to_string());
            }

            for cause in guide.common_causes {
                let cause = cause.to_lowercase();
                for word in matching_words(&cause, &message) {
                    score += CAUSE_WORD_WEIGHT;
                    matched_keywords.push(word.to_string());
                }
            }

            if score > KEYWORD_THRESHOLD {
                trace!(guide = guide.id, score, "keyword analysis matched");
                results.push(ErrorMatch {
                    error_guide: guide,
                    confidence: score.min(KEYWORD_CONFIDENCE_CAP),
                    matched_pattern: KEYWORD_ANALYSIS,
                    matched_keywords: Some(matched_keywords),
                    suggested_fix: None,
                });
            }
        }

        results
    }

    pub fn all_error_guides(&self) -> &'static [ErrorGuideItem] {
        self.guides
    }

    pub fn error_guides_by_category(&self, category: Category) -> Vec<&'static ErrorGuideItem> {
        self.guides
            .iter()
            .filter(|guide| guide.category == category)
            .collect()
    }

    pub fn error_guide_by_id(&self, id: &str) -> Option<&'static ErrorGuideItem> {
        self.guides.iter().find(|guide| guide.id == id)
    }

    /// Guides listed as related to `id`. Ids that do not resolve are left out.
    pub fn related_errors(&self, id: &str) -> Vec<&'static ErrorGuideItem> {
        self.error_guide_by_id(id)
            .map(|guide| {
                guide
                    .related_errors
                    .iter()
                    .filter_map(|related| self.error_guide_by_id(related))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Case-insensitive substring search over id, title and description.
    pub fn search_error_guides(&self, query: &str) -> Vec<&'static ErrorGuideItem> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.guides
            .iter()
            .filter(|guide| {
                guide.id.contains(&query)
                    || guide.title.to_lowercase().contains(&query)
                    || guide.description.to_lowercase().contains(&query)
            })
            .collect()
    }
}

/// Whitespace-separated words of `text` that are long enough and occur in `message`.
fn matching_words<'t>(text: &'t str, message: &'t str) -> impl Iterator<Item = &'t str> + 't {
    text.split_whitespace()
        .filter(move |word| word.chars().count() >= MIN_WORD_CHARS && message.contains(word))
}
