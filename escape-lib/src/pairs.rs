use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    constants::{KEY_VALUE_DELIMITER, SEGMENT_DELIMITER},
    errors::PairError,
    parse_chars::escaped_to_escapable::{find_first_unescaped, unescape},
    tokenizer::Tokens,
};

/// Parses a block of comma separated `key=value` pairs.
///
/// ```
/// use escape_lib::pairs::parse_pairs;
///
/// let pairs = parse_pairs(r"desc=a\, b,role=admin").unwrap();
/// assert_eq!(pairs["desc"], "a, b");
/// assert_eq!(pairs["role"], "admin");
/// ```
///
/// Each segment is split on its first unescaped `=`. Keys and values are trimmed and values are
/// unescaped. Blank segments are skipped, so consecutive or trailing commas are harmless. A key
/// that appears more than once keeps its last value.
///
/// The first bad segment fails the whole block; a partial map is never returned.
pub fn parse_pairs<'a>(feed: impl Into<Option<&'a str>>) -> Result<HashMap<String, String>, PairError> {
    let mut pairs = HashMap::new();

    for segment in Tokens::new(feed, SEGMENT_DELIMITER) {
        let segment = segment.trim();
        if segment.is_empty() {
            trace!("skipping blank segment");
            continue;
        }

        let (key, value) = split_pair(segment)?;
        if let Some(previous) = pairs.insert(key, value) {
            trace!("segment '{segment}' repeats a key, replacing previous value '{previous}'");
        }
    }

    debug!("parsed {} key=value pairs", pairs.len());
    Ok(pairs)
}

fn split_pair(segment: &str) -> Result<(String, String), PairError> {
    let Some(equals_index) = find_first_unescaped(segment, KEY_VALUE_DELIMITER) else {
        debug!("rejecting segment without '{KEY_VALUE_DELIMITER}': '{segment}'");
        return Err(PairError::MalformedPair { segment: segment.to_string() });
    };

    let key = segment[..equals_index].trim();
    if key.is_empty() {
        debug!("rejecting segment with an empty key: '{segment}'");
        return Err(PairError::EmptyKey { segment: segment.to_string() });
    }

    let raw_value = &segment[(equals_index + KEY_VALUE_DELIMITER.len_utf8())..];
    let value = unescape(raw_value).trim().to_string();

    Ok((key.to_string(), value))
}
