//! End-to-end tests from raw bytes to documents.

use std::path::PathBuf;

use inifold_document::{Document, Position};
use inifold_parser::{
    DuplicateKeys, ParseErrorKind, ParserOptions, SectionCase, ValuePolicy, parse, parse_into,
    parse_with,
};
use rstest::rstest;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("inifold_parser=trace")
        .with_test_writer()
        .try_init();
}

fn fixture(name: &str) -> Vec<u8> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

mod documents {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_has_only_default_section() {
        init_tracing();
        let doc = parse(b"").unwrap();

        assert_eq!(doc.section_names().collect::<Vec<_>>(), vec![""]);
        assert_eq!(doc.default_section().len(), 0);
    }

    #[test]
    fn entry_in_section() {
        let doc = parse(b"[a]\nk=v\n").unwrap();
        assert_eq!(doc.get("a", "k"), Some("v"));
    }

    #[test]
    fn entries_before_header_go_to_default_section() {
        let doc = parse(b"k=v\n[a]\nj=w\n").unwrap();

        assert_eq!(doc.get("", "k"), Some("v"));
        assert_eq!(doc.get("", "j"), None);
        assert_eq!(doc.get("a", "j"), Some("w"));
    }

    #[rstest]
    #[case::adjacent("[a]\nx = 1\n[a]\ny = 2\n")]
    #[case::interleaved("[a]\nx = 1\n[b]\nz = 3\n[a]\ny = 2\n")]
    #[case::empty_first("[a]\n[b]\n[a]\nx = 1\ny = 2\n")]
    fn repeated_headers_merge(#[case] input: &str) {
        init_tracing();
        let doc = parse(input.as_bytes()).unwrap();

        let names: Vec<_> = doc.section_names().filter(|name| *name == "a").collect();
        assert_eq!(names.len(), 1);

        let section = doc.section("a").unwrap();
        assert_eq!(section.get("x"), Some("1"));
        assert_eq!(section.get("y"), Some("2"));
    }

    #[test]
    fn fixture_file() {
        init_tracing();
        let doc = parse(&fixture("service.ini")).unwrap();

        assert_eq!(
            doc.section_names().collect::<Vec<_>>(),
            vec!["", "server", "logging"]
        );
        assert_eq!(doc.get("", "name"), Some("demo service"));
        assert_eq!(
            doc.section("server").unwrap().keys().collect::<Vec<_>>(),
            vec!["host", "port", "workers"]
        );
        assert_eq!(doc.get("logging", "level"), Some("info"));
    }

    #[test]
    fn document_outlives_input_buffer() {
        let doc = {
            let buffer = String::from("[owned]\nkey = value\n").into_bytes();
            parse(&buffer).unwrap()
        };
        assert_eq!(doc.get("owned", "key"), Some("value"));
    }
}

mod values {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case::single_spaces("key = v1 v2 v3")]
    #[case::extra_spaces("key   =   v1    v2\tv3   ")]
    #[case::trailing_newline("key = v1 v2 v3\n")]
    fn joined_with_single_spaces(#[case] input: &str) {
        let doc = parse(input.as_bytes()).unwrap();
        assert_eq!(doc.get("", "key"), Some("v1 v2 v3"));
    }

    #[test]
    fn bracketed_value_stays_a_value() {
        let doc = parse(b"path = [x]\n").unwrap();

        assert_eq!(doc.section_names().collect::<Vec<_>>(), vec![""]);
        assert_eq!(doc.get("", "path"), Some("[x]"));
    }

    #[test]
    fn values_do_not_continue_onto_next_line() {
        let err = parse(b"k = 1\n2\n").unwrap_err();

        assert_eq!(err.kind(), ParseErrorKind::ValueWithoutKey);
        assert_eq!(err.position(), Position::new(2, 0));
        assert_eq!(err.lexeme(), "2");
    }

    #[test]
    fn missing_value_is_empty_string() {
        let doc = parse(b"key =\n").unwrap();
        assert_eq!(doc.get("", "key"), Some(""));
    }

    #[test]
    fn first_value_policy() {
        let options = ParserOptions::new().with_values(ValuePolicy::First);
        let doc = parse_with(b"key = v1 v2\nother =\n", options).unwrap();

        assert_eq!(doc.get("", "key"), Some("v1"));
        assert_eq!(doc.get("", "other"), Some(""));
    }
}

mod duplicates {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn overwrite_keeps_last() {
        let options = ParserOptions::new().with_duplicate_keys(DuplicateKeys::Overwrite);
        let doc = parse_with(b"x = 1\nx = 2\n", options).unwrap();

        let section = doc.default_section();
        assert_eq!(section.len(), 1);
        assert_eq!(section.get("x"), Some("2"));
    }

    #[test]
    fn preserve_keeps_arrival_order() {
        let options = ParserOptions::new().with_duplicate_keys(DuplicateKeys::Preserve);
        let doc = parse_with(b"x = 1\nx = 2\n", options).unwrap();

        let pairs: Vec<_> = doc
            .default_section()
            .entries()
            .iter()
            .map(|e| (e.key(), e.value()))
            .collect();
        assert_eq!(pairs, vec![("x", "1"), ("x", "2")]);
        assert_eq!(doc.get("", "x"), Some("1"));
    }

    #[test]
    fn lowercase_sections_merge_across_case() {
        let options = ParserOptions::new().with_section_case(SectionCase::Lowercase);
        let doc = parse_with(b"[Net]\na = 1\n[NET]\nb = 2\n", options).unwrap();

        assert_eq!(doc.section_names().collect::<Vec<_>>(), vec!["", "net"]);
        assert_eq!(doc.get("net", "b"), Some("2"));
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case::unexpected_equals("= v", ParseErrorKind::UnexpectedEquals, Position::new(1, 0))]
    #[case::key_without_equals("k v", ParseErrorKind::KeyWithoutEquals, Position::new(1, 0))]
    #[case::value_without_key("v", ParseErrorKind::ValueWithoutKey, Position::new(1, 0))]
    #[case::value_on_later_line("[a]\nk = v\n  stray\n", ParseErrorKind::ValueWithoutKey, Position::new(3, 2))]
    #[case::stray_bracket("k = v\n]\n", ParseErrorKind::IllegalToken, Position::new(2, 0))]
    #[case::key_before_header("k [a]\n", ParseErrorKind::KeyWithoutEquals, Position::new(1, 0))]
    fn halts_at_first_error(
        #[case] input: &str,
        #[case] kind: ParseErrorKind,
        #[case] position: Position,
    ) {
        init_tracing();
        let err = parse(input.as_bytes()).unwrap_err();

        assert_eq!(err.kind(), kind);
        assert_eq!(err.position(), position);
    }

    #[test]
    fn only_first_error_is_reported() {
        let err = parse(b"a b\n= c\nd\n").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::KeyWithoutEquals);
        assert_eq!(err.lexeme(), "a");
    }

    #[test]
    fn invalid_utf8_is_illegal() {
        let mut doc = Document::new();
        let err = parse_into(&fixture("invalid_utf8.ini"), &mut doc).unwrap_err();

        assert_eq!(err.kind(), ParseErrorKind::IllegalToken);
        assert_eq!(err.position(), Position::new(3, 0));
        assert_eq!(doc.get("a", "k"), Some("v"));
        assert_eq!(doc.get("a", "j"), None);
    }

    #[test]
    fn parse_into_leaves_partial_document() {
        let mut doc = Document::new();
        let err = parse_into(b"[a]\nx = 1\n[b]\ny\n", &mut doc).unwrap_err();

        assert_eq!(err.kind(), ParseErrorKind::ValueWithoutKey);
        assert_eq!(doc.get("a", "x"), Some("1"));
        assert!(doc.section("b").unwrap().is_empty());
    }
}

mod lifecycle {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn remove_section_releases_entries() {
        let mut doc = parse(b"[a]\nx = 1\n[b]\ny = 2\n").unwrap();
        let removed = doc.remove_section("a").unwrap();

        assert_eq!(removed.get("x"), Some("1"));
        assert!(doc.section("a").is_none());
        assert_eq!(doc.get("b", "y"), Some("2"));
    }

    #[test]
    fn clear_returns_to_fresh_document() {
        let mut doc = parse(b"top = 1\n[a]\nx = 1\n").unwrap();
        doc.clear();

        assert_eq!(doc, Document::new());
        assert_eq!(doc.get("", "top"), None);
        assert!(doc.section("a").is_none());

        parse_into(b"[c]\nz = 3\n", &mut doc).unwrap();
        assert_eq!(doc.get("c", "z"), Some("3"));
    }
}
