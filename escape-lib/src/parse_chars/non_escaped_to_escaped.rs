use std::str::Chars;

use crate::constants::ESCAPE_MARKER;

use super::char_token::EscapableChar;

/// Converts literal text into its escaped spelling for a given delimiter. Backslashes and every
/// character that could begin the delimiter are escaped, so no delimiter match can start inside
/// the text once it is joined with others.
pub struct NonEscapedIntoEscapedIter<'a> {
    chars: Chars<'a>,
    delimiter_start: Option<char>,
}

impl<'a> NonEscapedIntoEscapedIter<'a> {
    #[inline]
    pub fn new(text: &'a str, delimiter: &str) -> Self {
        NonEscapedIntoEscapedIter {
            chars: text.chars(),
            delimiter_start: delimiter.chars().next(),
        }
    }
}

impl<'a> Iterator for NonEscapedIntoEscapedIter<'a> {
    type Item = EscapableChar;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.chars.next() {
            None => None,
            Some(ESCAPE_MARKER) => Some(EscapableChar::Escaped(ESCAPE_MARKER)),
            Some(character) if Some(character) == self.delimiter_start => Some(EscapableChar::Escaped(character)),
            Some(character) => Some(EscapableChar::Plain(character)),
        }
    }
}

/// Escapes `text` so that tokenizing it on `delimiter` gives back exactly `text`.
pub fn escape(text: &str, delimiter: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in NonEscapedIntoEscapedIter::new(text, delimiter) {
        match character {
            EscapableChar::Plain(character) => escaped.push(character),
            EscapableChar::Escaped(character) => {
                escaped.push(ESCAPE_MARKER);
                escaped.push(character);
            },
            EscapableChar::TrailingEscape => escaped.push(ESCAPE_MARKER),
        }
    }
    escaped
}
