//! Tests for header and blank-line classification

use super::super::parser::{LineKind, RecordParser};

#[test]
fn test_first_line_is_always_header() {
    let parser = RecordParser::new();

    assert_eq!(parser.classify(1, "id,postcode,latitude,longitude"), LineKind::Header);
    // A header that looks like data is still a header
    assert_eq!(parser.classify(1, "1,SW1A 1AA,51.5074,-0.1278"), LineKind::Header);
    assert_eq!(parser.classify(1, ""), LineKind::Header);
}

#[test]
fn test_whitespace_only_lines_are_blank() {
    let parser = RecordParser::new();

    for raw in ["", " ", "\t", "   \t  ", "\r"] {
        assert_eq!(parser.classify(5, raw), LineKind::Blank, "{:?}", raw);
    }
}

#[test]
fn test_data_lines_are_trimmed() {
    let parser = RecordParser::new();

    assert_eq!(
        parser.classify(2, "  1,SW1A 1AA,51.5074,-0.1278 \r"),
        LineKind::Data("1,SW1A 1AA,51.5074,-0.1278")
    );
}

#[test]
fn test_is_header_covers_only_first_line() {
    let parser = RecordParser::new();

    assert!(parser.is_header(1));
    assert!(!parser.is_header(2));
}
