//! Human-readable rendering of analyzer and validator output.

use crate::analyzer::ErrorMatch;
use crate::catalog::ErrorGuideItem;
use crate::config::{AnalysisConfig, DisplayConfig};
use crate::theme::Theme;
use crate::validate::Diagnosis;

/// Drop matches under the configured confidence floor and cap the list length.
pub fn limit_matches(mut matches: Vec<ErrorMatch>, config: &AnalysisConfig) -> Vec<ErrorMatch> {
    matches.retain(|m| m.confidence >= config.min_confidence);
    if config.max_results > 0 {
        matches.truncate(config.max_results);
    }
    matches
}

pub fn confidence_badge(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}

pub struct Renderer {
    theme: Theme,
    show_examples: bool,
}

impl Renderer {
    pub fn new(theme: Theme, show_examples: bool) -> Self {
        Self {
            theme,
            show_examples,
        }
    }

    pub fn from_config(display: &DisplayConfig) -> Self {
        Self::new(Theme::from_config(display), display.show_examples)
    }

    pub fn matches(&self, matches: &[ErrorMatch]) -> String {
        if matches.is_empty() {
            return format!(
                "{}\n",
                self.theme.muted.apply("No diagnosis available for this error.")
            );
        }

        let mut out = String::new();
        for (i, m) in matches.iter().enumerate() {
            let guide = m.error_guide;
            out.push_str(&format!(
                "{}. {} [{}] {}\n",
                i + 1,
                self.theme.title.apply(guide.title),
                self.theme
                    .confidence(m.confidence)
                    .apply(&confidence_badge(m.confidence)),
                self.theme.muted.apply(&format!(
                    "{} / {} severity / via {}",
                    guide.category, guide.severity, m.matched_pattern
                )),
            ));
            out.push_str(&format!("   {}\n", guide.description));

            if let Some(keywords) = &m.matched_keywords {
                out.push_str(&format!(
                    "   {}\n",
                    self.theme
                        .muted
                        .apply(&format!("keywords: {}", keywords.join(", ")))
                ));
            }

            if self.show_examples {
                out.push_str(&self.examples(guide, "   "));
            }

            if let Some(fix) = &m.suggested_fix {
                out.push_str(&format!("   {}\n", self.theme.header.apply("Suggested fix:")));
                for line in fix.lines() {
                    out.push_str(&format!("     {}\n", self.theme.fix.apply(line)));
                }
            }

            out.push('\n');
        }

        out
    }

    pub fn guide(&self, guide: &ErrorGuideItem, related: &[&ErrorGuideItem]) -> String {
        let mut out = format!("{}\n", self.theme.header.apply(guide.title));
        out.push_str(&format!(
            "{}\n",
            self.theme.muted.apply(&format!(
                "id: {} / category: {} / severity: {}",
                guide.id, guide.category, guide.severity
            ))
        ));
        out.push_str(&format!("\n{}\n", guide.description));

        if !guide.common_causes.is_empty() {
            out.push_str(&format!("\n{}\n", self.theme.title.apply("Common causes")));
            for cause in guide.common_causes {
                out.push_str(&format!("  - {}\n", cause));
            }
        }

        out.push('\n');
        out.push_str(&self.examples(guide, ""));

        if !guide.tips.is_empty() {
            out.push_str(&format!("\n{}\n", self.theme.title.apply("Tips")));
            for tip in guide.tips {
                out.push_str(&format!("  - {}\n", tip));
            }
        }

        if !related.is_empty() {
            out.push_str(&format!("\n{}\n", self.theme.title.apply("Related errors")));
            for item in related {
                out.push_str(&format!(
                    "  - {} ({})\n",
                    item.title,
                    self.theme.muted.apply(item.id)
                ));
            }
        }

        out
    }

    pub fn guide_list(&self, guides: &[&ErrorGuideItem]) -> String {
        if guides.is_empty() {
            return format!("{}\n", self.theme.muted.apply("No matching error guides."));
        }

        let width = guides.iter().map(|g| g.id.len()).max().unwrap_or(0);
        let mut out = String::new();
        for guide in guides {
            out.push_str(&format!(
                "{:<width$}  {}  {}\n",
                guide.id,
                self.theme.title.apply(guide.title),
                self.theme
                    .muted
                    .apply(&format!("[{}, {}]", guide.category, guide.severity)),
                width = width
            ));
        }

        out
    }

    pub fn diagnoses(&self, diagnoses: &[Diagnosis], config: &AnalysisConfig) -> String {
        let mut out = String::new();

        for diagnosis in diagnoses {
            out.push_str(&format!(
                "{}: {}\n",
                self.theme.header.apply(&format!(
                    "{}:{}:{}",
                    diagnosis.source, diagnosis.error.line, diagnosis.error.column
                )),
                diagnosis.error.message
            ));
            let matches = limit_matches(diagnosis.matches.clone(), config);
            out.push_str(&self.matches(&matches));
        }

        out
    }

    fn examples(&self, guide: &ErrorGuideItem, indent: &str) -> String {
        let mut out = format!("{}{}\n", indent, self.theme.title.apply("Bad:"));
        for line in guide.bad_example.lines() {
            out.push_str(&format!("{}  {}\n", indent, self.theme.bad_example.apply(line)));
        }
        out.push_str(&format!("{}{}\n", indent, self.theme.title.apply("Good:")));
        for line in guide.solution.lines() {
            out.push_str(&format!("{}  {}\n", indent, self.theme.solution.apply(line)));
        }
        out
    }
}
