use crate::parse_chars::{char_token::EscapableChar, escaped_to_escapable::EscapedCharIter};

/// Reads an escaped string feed and splits it on every unescaped occurrence of the delimiter.
/// Escape sequences are resolved in the yielded segments. Segments are yielded in input order and
/// empty segments are kept, so a feed with `n` unescaped delimiters yields exactly `n + 1`
/// segments. The empty feed is the exception and yields no segments at all.
///
/// The delimiter may be several characters long; it is matched as a whole string at each unescaped
/// position. An empty delimiter never matches.
pub struct Tokens<'a> {
    feed: &'a str,
    delimiter: &'a str,
    finished: bool,
}

impl<'a> Tokens<'a> {
    #[inline]
    pub fn new(feed: impl Into<Option<&'a str>>, delimiter: &'a str) -> Self {
        let feed = feed.into().unwrap_or_default();
        Tokens {
            feed,
            delimiter,
            finished: feed.is_empty(),
        }
    }

    #[inline]
    fn delimiter_at(&self, index: usize) -> bool {
        !self.delimiter.is_empty() && self.feed[index..].starts_with(self.delimiter)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut segment = String::new();
        for (index, character) in EscapedCharIter::new(self.feed) {
            match character {
                EscapableChar::Plain(_) if self.delimiter_at(index) => {
                    self.feed = &self.feed[(index + self.delimiter.len())..];
                    return Some(segment);
                },
                _ => segment.push(character.into_unescaped_character()),
            }
        }

        // The last segment is always emitted, even when the feed ended on a delimiter.
        self.feed = "";
        self.finished = true;
        Some(segment)
    }
}

impl<'a> std::iter::FusedIterator for Tokens<'a> {}

/// Splits `feed` on every unescaped `delimiter`. Absent and empty feeds give an empty list.
#[inline]
pub fn tokenize<'a>(feed: impl Into<Option<&'a str>>, delimiter: &'a str) -> Vec<String> {
    Tokens::new(feed, delimiter).collect()
}
