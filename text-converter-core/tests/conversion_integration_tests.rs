//! Integration tests for text-converter-core.
//!
//! These tests exercise the public API (`convert`, `convert_named`,
//! `ConversionTable`, `ConversionKind`) the way a host integration uses it,
//! plus property-based idempotence checks.

use proptest::prelude::*;
use text_converter_core::{
    ConversionError, ConversionKind, ConversionTable, convert, convert_named,
};

// ---------------------------------------------------------------------------
// Reference conversions
// ---------------------------------------------------------------------------

#[test]
fn reference_conversions() {
    let cases = [
        (ConversionKind::CamelCase, "hello world", "helloWorld"),
        (ConversionKind::SnakeCase, "Hello World", "hello_world"),
        (ConversionKind::KebabCase, "Hello World", "hello-world"),
        (ConversionKind::TitleCase, "hello world", "Hello World"),
        (ConversionKind::SnakeCase, "helloWorld", "hello_world"),
        (ConversionKind::UpperCase, "abc123", "ABC123"),
        (ConversionKind::LowerCase, "ABC123", "abc123"),
    ];

    for (kind, input, expected) in cases {
        assert_eq!(convert(kind, input), expected, "{kind:?} on {input:?}");
    }
}

#[test]
fn table_and_convert_agree() {
    let input = "The quick brownFox jumps_over the-lazy dog";
    for (kind, function) in ConversionTable::global().iter() {
        assert_eq!(function(input), convert(kind, input), "{kind:?}");
    }
}

#[test]
fn every_id_round_trips_through_parse() {
    for kind in ConversionKind::ALL {
        assert_eq!(kind.id().parse::<ConversionKind>(), Ok(kind));
        assert_eq!(
            convert_named(kind.id(), "some Text").expect("id should be accepted"),
            convert(kind, "some Text")
        );
    }
}

#[test]
fn unknown_identifier_produces_no_output() {
    let result = convert_named("text-converter.toScreamingCase", "hello");
    assert_eq!(
        result,
        Err(ConversionError::UnknownConversionKind(
            "text-converter.toScreamingCase".to_string()
        ))
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "unknown conversion kind: 'text-converter.toScreamingCase'"
    );
}

#[test]
fn kinds_serialize_as_command_ids() {
    let yaml = serde_yaml_ng::to_string(&ConversionKind::KebabCase).expect("serialize kind");
    assert_eq!(yaml.trim(), "toKebabCase");

    let kinds: Vec<ConversionKind> =
        serde_yaml_ng::from_str("- snake\n- TitleCase\n- toUpperCase\n").expect("parse kinds");
    assert_eq!(
        kinds,
        vec![
            ConversionKind::SnakeCase,
            ConversionKind::TitleCase,
            ConversionKind::UpperCase
        ]
    );

    let err = serde_yaml_ng::from_str::<ConversionKind>("sponge").expect_err("unknown kind");
    assert!(err.to_string().contains("unknown conversion kind"));
}

#[test]
fn table_is_shared_across_threads() {
    let inputs = ["first thing", "secondThing", "THIRD-THING", "fourth_thing"];
    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| scope.spawn(move || convert(ConversionKind::SnakeCase, input)))
            .collect();
        let results: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().expect("conversion thread panicked"))
            .collect();
        assert_eq!(
            results,
            vec!["first_thing", "second_thing", "third-thing", "fourth_thing"]
        );
    });
}

// ---------------------------------------------------------------------------
// Property-based idempotence
// ---------------------------------------------------------------------------

fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \t_.,!?éÉß-]{0,48}"
}

fn arb_word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9éÉß]{0,8}"
}

fn arb_separator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", "  ", "-", "_", "\t", " - "])
}

/// Mixed-case words joined by separator runs.
fn arb_phrase() -> impl Strategy<Value = String> {
    (
        arb_word(),
        prop::collection::vec((arb_separator(), arb_word()), 0..6),
    )
        .prop_map(|(first, rest)| {
            let mut phrase = first;
            for (separator, word) in rest {
                phrase.push_str(separator);
                phrase.push_str(&word);
            }
            phrase
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn upper_case_is_idempotent(s in arb_text()) {
        let once = convert(ConversionKind::UpperCase, &s);
        prop_assert_eq!(convert(ConversionKind::UpperCase, &once), once);
    }

    #[test]
    fn lower_case_is_idempotent(s in arb_text()) {
        let once = convert(ConversionKind::LowerCase, &s);
        prop_assert_eq!(convert(ConversionKind::LowerCase, &once), once);
    }

    #[test]
    fn snake_case_is_idempotent(s in arb_text()) {
        let once = convert(ConversionKind::SnakeCase, &s);
        prop_assert_eq!(convert(ConversionKind::SnakeCase, &once), once);
    }

    #[test]
    fn kebab_case_is_idempotent(s in arb_text()) {
        let once = convert(ConversionKind::KebabCase, &s);
        prop_assert_eq!(convert(ConversionKind::KebabCase, &once), once);
    }

    #[test]
    fn camel_case_is_idempotent(s in arb_phrase()) {
        let once = convert(ConversionKind::CamelCase, &s);
        prop_assert_eq!(convert(ConversionKind::CamelCase, &once), once);
    }

    #[test]
    fn camel_case_is_idempotent_on_free_text(s in arb_text()) {
        let once = convert(ConversionKind::CamelCase, &s);
        prop_assert_eq!(convert(ConversionKind::CamelCase, &once), once);
    }

    #[test]
    fn camel_case_removes_separators(s in arb_phrase()) {
        let camel = convert(ConversionKind::CamelCase, &s);
        prop_assert!(!camel.chars().any(text_converter_core::is_word_separator));
    }

    #[test]
    fn upper_and_lower_keep_non_letters(s in "[0-9 .,!?_-]{0,32}") {
        prop_assert_eq!(convert(ConversionKind::UpperCase, &s), s.clone());
        prop_assert_eq!(convert(ConversionKind::LowerCase, &s), s);
    }
}
