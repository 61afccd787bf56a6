use std::str::CharIndices;

use crate::constants::ESCAPE_MARKER;

use super::char_token::EscapableChar;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
enum EscapeState {
    Normal,
    /// The escape marker has been consumed. Holds its byte index in case the input ends here.
    Escaped(usize),
}

/// Walks a string containing backslash escapes and classifies each character as plain, escaped,
/// or a trailing lone escape marker. The escape marker itself is never yielded except as
/// [EscapableChar::TrailingEscape].
///
/// Each item carries the byte index where it begins in the input. For an escaped character that is
/// the index of the character itself, not of the marker before it.
pub struct EscapedCharIter<'a> {
    chars: CharIndices<'a>,
    state: EscapeState,
}

impl<'a> EscapedCharIter<'a> {
    #[inline]
    pub fn new(feed: &'a str) -> Self {
        EscapedCharIter {
            chars: feed.char_indices(),
            state: EscapeState::Normal,
        }
    }
}

impl<'a> From<&'a str> for EscapedCharIter<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::new(value)
    }
}

impl<'a> Iterator for EscapedCharIter<'a> {
    type Item = (usize, EscapableChar);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match (self.state, self.chars.next()) {
                (EscapeState::Normal, None) => return None,
                (EscapeState::Escaped(marker_index), None) => {
                    self.state = EscapeState::Normal;
                    return Some((marker_index, EscapableChar::TrailingEscape));
                },
                (EscapeState::Escaped(_), Some((index, character))) => {
                    self.state = EscapeState::Normal;
                    return Some((index, EscapableChar::Escaped(character)));
                },
                (EscapeState::Normal, Some((index, ESCAPE_MARKER))) => {
                    self.state = EscapeState::Escaped(index);
                },
                (EscapeState::Normal, Some((index, character))) => {
                    return Some((index, EscapableChar::Plain(character)));
                },
            }
        }
    }
}

/// Resolves every escape sequence in the input. A trailing lone backslash is kept.
pub fn unescape(feed: &str) -> String {
    EscapedCharIter::new(feed)
        .map(|(_, character)| character.into_unescaped_character())
        .collect()
}

/// Byte index of the first occurrence of `target` that is not neutralized by an escape marker.
pub fn find_first_unescaped(feed: &str, target: char) -> Option<usize> {
    EscapedCharIter::new(feed)
        .find(|(_, character)| character.is_plain(target))
        .map(|(index, _)| index)
}
