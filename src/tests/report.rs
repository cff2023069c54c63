use super::TestUtils;
use crate::config::AnalysisConfig;
use crate::report::{confidence_badge, limit_matches};
use crate::validate::{DocumentFormat, Validator};
use pretty_assertions::assert_eq;

#[test]
fn test_confidence_badge() {
    assert_eq!(confidence_badge(0.95), "95%");
    assert_eq!(confidence_badge(0.8), "80%");
    assert_eq!(confidence_badge(0.0), "0%");
}

#[test]
fn test_limit_matches() {
    let analyzer = TestUtils::analyzer();
    let matches = analyzer.analyze_error("Unexpected token , in JSON at position 25", None);
    assert!(matches.len() >= 3);

    let config = AnalysisConfig {
        max_results: 2,
        min_confidence: 0.0,
        suggest_fixes: true,
    };
    assert_eq!(limit_matches(matches.clone(), &config).len(), 2);

    let config = AnalysisConfig {
        max_results: 0,
        min_confidence: 0.86,
        suggest_fixes: true,
    };
    let kept = limit_matches(matches.clone(), &config);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].error_guide.id, "trailing-comma");
}

#[test]
fn test_render_matches() {
    let analyzer = TestUtils::analyzer();
    let renderer = TestUtils::plain_renderer(true);
    let matches = analyzer.analyze_error(
        "Unexpected token , in JSON at position 25",
        Some(r#"{"a": 1,}"#),
    );

    let output = renderer.matches(&matches);

    assert!(output.starts_with("1. Trailing comma [90%]"));
    assert!(output.contains("via trailing-comma-token"));
    assert!(output.contains("Suggested fix:"));
    assert!(output.contains(r#"{"a": 1}"#));
    assert!(output.contains("keywords: unexpected, token"));
    assert!(output.contains("Bad:"));
}

#[test]
fn test_render_without_examples_or_matches() {
    let renderer = TestUtils::plain_renderer(false);
    let analyzer = TestUtils::analyzer();

    let output = renderer.matches(&analyzer.analyze_error("Unexpected end of JSON input", None));
    assert!(!output.contains("Bad:"));

    assert!(renderer.matches(&[]).contains("No diagnosis available"));
}

#[test]
fn test_render_guide_with_related() {
    let analyzer = TestUtils::analyzer();
    let renderer = TestUtils::plain_renderer(true);
    let guide = analyzer
        .error_guide_by_id("comments-not-allowed")
        .expect("comments guide");
    let related = analyzer.related_errors(guide.id);

    let output = renderer.guide(guide, &related);

    assert!(output.starts_with("Comments are not allowed\n"));
    assert!(output.contains("category: syntax / severity: low"));
    assert!(output.contains("Common causes"));
    assert!(output.contains("  - Unexpected token (unexpected-token)"));
    assert!(!output.contains("json5-syntax"));
}

#[test]
fn test_render_guide_list() {
    let analyzer = TestUtils::analyzer();
    let renderer = TestUtils::plain_renderer(true);
    let guides: Vec<_> = analyzer.all_error_guides().iter().take(2).collect();

    let output = renderer.guide_list(&guides);

    assert_eq!(output.lines().count(), 2);
    assert!(output.contains("trailing-comma    Trailing comma  [syntax, medium]"));
    assert!(renderer.guide_list(&[]).contains("No matching error guides."));
}

#[test]
fn test_render_diagnoses() {
    let analyzer = TestUtils::analyzer();
    let renderer = TestUtils::plain_renderer(false);
    let validator = Validator::new(&analyzer);
    let diagnoses = validator.check_str("data.jsonl", "{}\n[1,]\n", DocumentFormat::Jsonl);

    let output = renderer.diagnoses(&diagnoses, &AnalysisConfig::default());

    assert!(output.starts_with("data.jsonl:2:"));
    assert!(output.contains("trailing comma at line 2"));
    assert!(output.contains("Trailing comma"));
}
