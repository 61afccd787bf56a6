use std::fmt::{Debug, Display};

use crate::constants::ESCAPE_MARKER;

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum EscapableChar {
    /// A character that was not preceded by an escape marker. Only these can act as syntax.
    Plain(char),
    /// A character that was preceded by an escape marker. Always literal text.
    Escaped(char),
    /// An escape marker at the very end of the input with nothing left to escape. It is kept as a
    /// literal backslash rather than rejected.
    TrailingEscape,
}

impl EscapableChar {
    #[inline]
    pub fn into_unescaped_character(self) -> char {
        match self {
            EscapableChar::Plain(character) => character,
            EscapableChar::Escaped(character) => character,
            EscapableChar::TrailingEscape => ESCAPE_MARKER,
        }
    }

    #[inline]
    pub fn is_plain(&self, target: char) -> bool {
        matches!(self, EscapableChar::Plain(character) if *character == target)
    }
}

impl Display for EscapableChar {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain(character) => write!(f, "{character}"),
            Self::Escaped(character) => write!(f, "{ESCAPE_MARKER}{character}"),
            Self::TrailingEscape => write!(f, "{ESCAPE_MARKER}"),
        }
    }
}

impl Debug for EscapableChar {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain(character) => write!(f, "EscapableChar::Plain({character:?} '{self}')"),
            Self::Escaped(character) => write!(f, "EscapableChar::Escaped({character:?} '{self}')"),
            Self::TrailingEscape => write!(f, "EscapableChar::TrailingEscape('{self}')"),
        }
    }
}
