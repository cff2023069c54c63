use crate::analyzer::{escape_bare_quotes, quote_bare_keys, remove_trailing_commas, suggest_fix};
use pretty_assertions::assert_eq;

#[test]
fn test_remove_trailing_commas() {
    assert_eq!(
        remove_trailing_commas(r#"{"name": "John", "age": 30,}"#),
        r#"{"name": "John", "age": 30}"#
    );
    assert_eq!(remove_trailing_commas("[1, 2, 3 , ]"), "[1, 2, 3  ]");
    assert_eq!(
        remove_trailing_commas("{\n  \"a\": [1,\n  ],\n}"),
        "{\n  \"a\": [1\n  ]\n}"
    );
    assert_eq!(remove_trailing_commas(r#"{"a": 1, "b": 2}"#), r#"{"a": 1, "b": 2}"#);
}

#[test]
fn test_escape_bare_quotes_is_naive() {
    assert_eq!(escape_bare_quotes(r#"{"k": "v"}"#), r#"{\"k\": \"v\"}"#);
    // Quotes that are already escaped are left alone, everything else gets a backslash.
    assert_eq!(escape_bare_quotes(r#"say \"hi\" "now""#), r#"say \"hi\" \"now\""#);
    assert_eq!(escape_bare_quotes(r#""""#), r#"\"\""#);
    assert_eq!(escape_bare_quotes("no quotes"), "no quotes");
}

#[test]
fn test_quote_bare_keys() {
    assert_eq!(
        quote_bare_keys(r#"{name: "John", age: 30}"#),
        r#"{"name": "John", "age": 30}"#
    );
    assert_eq!(
        quote_bare_keys("{\n  _id: 1,\n  value2: 2\n}"),
        "{\n  \"_id\": 1,\n  \"value2\": 2\n}"
    );
    assert_eq!(quote_bare_keys(r#"{"name": "John"}"#), r#"{"name": "John"}"#);
}

#[test]
fn test_suggest_fix_dispatch() {
    assert_eq!(suggest_fix("trailing-comma", "[1,]").as_deref(), Some("[1]"));
    assert_eq!(suggest_fix("invalid-string", r#"""#).as_deref(), Some(r#"\""#));
    assert_eq!(suggest_fix("invalid-property", "{a: 1}").as_deref(), Some(r#"{"a": 1}"#));
    assert_eq!(suggest_fix("unexpected-end", "{"), None);
    assert_eq!(suggest_fix("no-such-type", "{"), None);
}
