//! Integration tests for the public API

use gridspec::prelude::*;
use gridspec::{format_spec, parse, parse_optional, parse_strict, parse_with_diagnostics};

#[test]
fn test_parse_empty_and_absent() {
    assert!(parse("").is_empty());
    assert!(parse_optional(None).is_empty());
}

#[test]
fn test_parse_preserves_order() {
    let defs = parse("Auto,*,200");
    assert_eq!(
        defs,
        vec![
            SizingDefinition::auto(),
            SizingDefinition::star(1.0),
            SizingDefinition::pixel(200.0),
        ]
    );
}

#[test]
fn test_parse_weighted_star() {
    let defs = parse("2*,*,Auto");
    assert_eq!(defs.len(), 3);
    assert_eq!(defs[0].kind, SizeKind::Star);
    assert_eq!(defs[0].value, 2.0);
    assert_eq!(defs[1].kind, SizeKind::Star);
    assert_eq!(defs[1].value, 1.0);
    assert_eq!(defs[2].kind, SizeKind::Auto);
}

#[test]
fn test_parse_min_and_max() {
    let defs = parse("*(min=100,max=200)");
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].kind, SizeKind::Star);
    assert_eq!(defs[0].value, 1.0);
    assert_eq!(defs[0].min_value, Some(100.0));
    assert_eq!(defs[0].max_value, Some(200.0));
    assert_eq!(defs[0].shared_size_group, None);
}

#[test]
fn test_parse_shared_size_group() {
    let defs = parse("Auto(SharedSizeGroup=abc)");
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].kind, SizeKind::Auto);
    assert_eq!(defs[0].shared_size_group.as_deref(), Some("abc"));
}

#[test]
fn test_parse_drops_invalid_tokens() {
    assert_eq!(parse("foo,100,bar"), vec![SizingDefinition::pixel(100.0)]);
}

#[test]
fn test_parse_ignores_unparseable_option() {
    let defs = parse("100(min=abc)");
    assert_eq!(defs, vec![SizingDefinition::pixel(100.0)]);
    assert_eq!(defs[0].min_value, None);
}

#[test]
fn test_all_invalid_looks_like_empty() {
    assert_eq!(parse("foo,bar"), parse(""));
}

#[test]
fn test_documented_samples() {
    let defs = parse("*(min=100,max=200),Auto(min=100),200,Auto(SharedSizeGroup=abc)");
    assert_eq!(
        defs,
        vec![
            SizingDefinition::star(1.0).with_min(100.0).with_max(200.0),
            SizingDefinition::auto().with_min(100.0),
            SizingDefinition::pixel(200.0),
            SizingDefinition::auto().with_shared_size_group("abc"),
        ]
    );

    let defs = parse("Auto(max=500),*(min=300),100");
    assert_eq!(defs[0].max_value, Some(500.0));
    assert_eq!(defs[1].min_value, Some(300.0));
    assert_eq!(defs[2].value, 100.0);
}

#[test]
fn test_diagnostics_match_parse() {
    let input = "Auto,oops,*(min=1,bogus=2),";
    let report = parse_with_diagnostics(input);
    assert_eq!(report.definitions, parse(input));
    assert!(!report.is_clean());
    assert_eq!(
        report
            .diagnostics
            .iter()
            .map(Diagnostic::index)
            .collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn test_strict_parse() {
    assert_eq!(parse_strict("Auto,*").unwrap().len(), 2);

    let err = parse_strict("Auto,*,20O").unwrap_err();
    assert_eq!(
        err.diagnostics(),
        &[Diagnostic::UnrecognizedSize {
            index: 2,
            text: "20O".to_string()
        }]
    );
}

#[test]
fn test_format_spec_round_trip() {
    let normalized = format_spec("AUTO(min=1.5),3*(SharedSizeGroup=g,max=9),junk");
    assert_eq!(normalized, "Auto(min=1.5),3*(max=9,SharedSizeGroup=g)");
    assert_eq!(format_spec(&normalized), normalized);
}
