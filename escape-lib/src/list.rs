use log::trace;

use crate::{constants::SEGMENT_DELIMITER, tokenizer::tokenize};

/// Splits a comma separated list such as a set of grants. Unlike [tokenize], a feed that is blank
/// is treated as having no items at all. Items are not trimmed.
pub fn parse_comma_separated_list<'a>(feed: impl Into<Option<&'a str>>) -> Vec<String> {
    match feed.into() {
        Some(feed) if !feed.trim().is_empty() => tokenize(feed, SEGMENT_DELIMITER),
        _ => {
            trace!("blank list, no items");
            Vec::new()
        },
    }
}

#[cfg(test)]
mod list_tests {
    use rstest::rstest;

    use super::parse_comma_separated_list;

    #[rstest]
    #[case::simple("value1,value2,value3", &["value1", "value2", "value3"])]
    #[case::single("singlevalue", &["singlevalue"])]
    #[case::escaped_commas(r"value1,value with\, comma,value3", &["value1", "value with, comma", "value3"])]
    #[case::escaped_backslashes(r"value1,path\\to\\file,value3", &["value1", r"path\to\file", "value3"])]
    #[case::trailing_comma("value1,value2,", &["value1", "value2", ""])]
    #[case::grants("canpublish:true,cansubscribe:true,roomadmin:false", &["canpublish:true", "cansubscribe:true", "roomadmin:false"])]
    #[case::untrimmed(" a, b ", &[" a", " b "])]
    fn parse_list(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(parse_comma_separated_list(input), expected, "Input: '{input}'");
    }

    #[rstest]
    #[case::empty(Some(""))]
    #[case::whitespace(Some("   "))]
    #[case::tabs(Some("\t\n"))]
    #[case::absent(None)]
    fn blank_list_has_no_items(#[case] input: Option<&str>) {
        assert!(parse_comma_separated_list(input).is_empty());
    }
}
