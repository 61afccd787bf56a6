/// Neutralizes whatever character follows it. Never configurable.
pub const ESCAPE_MARKER: char = '\\';

/// Separates segments in key=value blocks and in comma lists.
pub const SEGMENT_DELIMITER: &str = ",";

/// Separates a key from its value. Only the first unescaped occurrence counts.
pub const KEY_VALUE_DELIMITER: char = '=';
