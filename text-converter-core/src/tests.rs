//! Tests for the casing conversions.

use super::{ConversionError, ConversionKind, convert, convert_named};

// Upper / lower
#[test]
fn test_upper_case() {
    assert_eq!(convert(ConversionKind::UpperCase, "Hello World"), "HELLO WORLD");
    assert_eq!(convert(ConversionKind::UpperCase, "abc123"), "ABC123");
    assert_eq!(convert(ConversionKind::UpperCase, "straße"), "STRASSE");
}

#[test]
fn test_lower_case() {
    assert_eq!(convert(ConversionKind::LowerCase, "Hello World"), "hello world");
    assert_eq!(convert(ConversionKind::LowerCase, "ABC-123_!?"), "abc-123_!?");
}

// camelCase
#[test]
fn test_camel_case_from_words() {
    assert_eq!(convert(ConversionKind::CamelCase, "hello world"), "helloWorld");
    assert_eq!(convert(ConversionKind::CamelCase, "Hello World"), "helloWorld");
    assert_eq!(convert(ConversionKind::CamelCase, "HELLO WORLD"), "helloWorld");
}

#[test]
fn test_camel_case_from_separated() {
    assert_eq!(convert(ConversionKind::CamelCase, "hello_world"), "helloWorld");
    assert_eq!(convert(ConversionKind::CamelCase, "hello-world"), "helloWorld");
    assert_eq!(
        convert(ConversionKind::CamelCase, "the  quick-_ brown\tfox"),
        "theQuickBrownFox"
    );
}

#[test]
fn test_camel_case_no_separators() {
    assert_eq!(convert(ConversionKind::CamelCase, "hello"), "hello");
    assert_eq!(convert(ConversionKind::CamelCase, "HELLO"), "hello");
    assert_eq!(convert(ConversionKind::CamelCase, "Hello"), "hello");
}

#[test]
fn test_camel_case_keeps_existing_boundaries() {
    assert_eq!(convert(ConversionKind::CamelCase, "helloWorld"), "helloWorld");
    assert_eq!(convert(ConversionKind::CamelCase, "HelloWorld"), "helloWorld");
}

#[test]
fn test_camel_case_leading_and_trailing_separators() {
    assert_eq!(convert(ConversionKind::CamelCase, "  hello world  "), "helloWorld");
    assert_eq!(convert(ConversionKind::CamelCase, "__init__"), "init");
    assert_eq!(convert(ConversionKind::CamelCase, "hello-"), "hello");
}

#[test]
fn test_camel_case_output_is_stable() {
    for (input, expected) in [
        ("ab cD", "abCd"),
        ("aB c", "aBc"),
        ("a b c", "aBc"),
        ("version1 beta", "version1beta"),
        ("straße ßig", "straßeSsig"),
    ] {
        let once = convert(ConversionKind::CamelCase, input);
        assert_eq!(once, expected, "first pass over {input:?}");
        assert_eq!(convert(ConversionKind::CamelCase, &once), once, "second pass over {input:?}");
    }
}

#[test]
fn test_camel_case_leading_separators_keep_first_word_lower() {
    assert_eq!(convert(ConversionKind::CamelCase, "  hello"), "hello");
    assert_eq!(convert(ConversionKind::CamelCase, "-Hello world"), "helloWorld");
}

#[test]
fn test_camel_case_acronym() {
    assert_eq!(convert(ConversionKind::CamelCase, "HTTPServer"), "httpserver");
    assert_eq!(convert(ConversionKind::CamelCase, "parse HTTP"), "parseHttp");
}

// snake_case
#[test]
fn test_snake_case() {
    assert_eq!(convert(ConversionKind::SnakeCase, "Hello World"), "hello_world");
    assert_eq!(convert(ConversionKind::SnakeCase, "helloWorld"), "hello_world");
    assert_eq!(convert(ConversionKind::SnakeCase, "hello   world"), "hello_world");
}

#[test]
fn test_snake_case_keeps_hyphens() {
    assert_eq!(convert(ConversionKind::SnakeCase, "Foo-Bar baz"), "foo-bar_baz");
}

#[test]
fn test_snake_case_already_snake() {
    assert_eq!(convert(ConversionKind::SnakeCase, "hello_world"), "hello_world");
}

#[test]
fn test_snake_case_acronym() {
    assert_eq!(convert(ConversionKind::SnakeCase, "HTTPServer"), "httpserver");
    assert_eq!(convert(ConversionKind::SnakeCase, "getHTTPResponse"), "get_httpresponse");
}

// kebab-case
#[test]
fn test_kebab_case() {
    assert_eq!(convert(ConversionKind::KebabCase, "Hello World"), "hello-world");
    assert_eq!(convert(ConversionKind::KebabCase, "helloWorld"), "hello-world");
    assert_eq!(convert(ConversionKind::KebabCase, "hello-world"), "hello-world");
}

#[test]
fn test_kebab_case_keeps_underscores() {
    assert_eq!(convert(ConversionKind::KebabCase, "my_var Name"), "my_var-name");
}

// Title Case
#[test]
fn test_title_case() {
    assert_eq!(convert(ConversionKind::TitleCase, "hello world"), "Hello World");
    assert_eq!(convert(ConversionKind::TitleCase, "hELLo"), "Hello");
    assert_eq!(convert(ConversionKind::TitleCase, "HELLO WORLD"), "Hello World");
}

#[test]
fn test_title_case_preserves_layout() {
    assert_eq!(
        convert(ConversionKind::TitleCase, "  hello,   big  world!\n"),
        "  Hello,   Big  World!\n"
    );
    assert_eq!(convert(ConversionKind::TitleCase, "(hello) [wORLD]"), "(Hello) [World]");
}

#[test]
fn test_title_case_token_spans_punctuation() {
    assert_eq!(convert(ConversionKind::TitleCase, "it's ok"), "It's Ok");
    assert_eq!(convert(ConversionKind::TitleCase, "hello-WORLD"), "Hello-world");
}

// Edge cases shared by every kind
#[test]
fn test_empty_input_is_noop() {
    for kind in ConversionKind::ALL {
        assert_eq!(convert(kind, ""), "", "{kind:?} should map empty to empty");
    }
}

#[test]
fn test_non_alphabetic_input() {
    assert_eq!(convert(ConversionKind::UpperCase, "123 !?"), "123 !?");
    assert_eq!(convert(ConversionKind::LowerCase, "123 !?"), "123 !?");
    assert_eq!(convert(ConversionKind::CamelCase, "123 !?"), "123!?");
    assert_eq!(convert(ConversionKind::SnakeCase, "123 !?"), "123_!?");
    assert_eq!(convert(ConversionKind::KebabCase, "123 !?"), "123-!?");
    assert_eq!(convert(ConversionKind::TitleCase, "123 !?"), "123 !?");
}

#[test]
fn test_separator_only_input() {
    assert_eq!(convert(ConversionKind::CamelCase, " -_ "), "");
    assert_eq!(convert(ConversionKind::SnakeCase, "   "), "_");
    assert_eq!(convert(ConversionKind::KebabCase, "   "), "-");
}

// Named dispatch
#[test]
fn test_convert_named() {
    assert_eq!(
        convert_named("toKebabCase", "Hello World").expect("known kind should convert"),
        "hello-world"
    );
    assert_eq!(
        convert_named("snake", "fooBar").expect("known kind should convert"),
        "foo_bar"
    );
}

#[test]
fn test_convert_named_unknown_kind() {
    assert_eq!(
        convert_named("toPascalCase", "hello world"),
        Err(ConversionError::UnknownConversionKind(
            "toPascalCase".to_string()
        ))
    );
}
