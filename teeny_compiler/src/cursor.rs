//! Character scanner.
use itertools::{multipeek, MultiPeek};
use std::{
    iter::{self, Chain, Once},
    str::CharIndices,
};

/// There is no end-of-file character, so the null-byte stands in for it.
pub(crate) const EOF_CHAR: char = '\0';

/// Appended after the source text so the final statement
/// is terminated like any other.
pub(crate) const SENTINEL_CHAR: char = '\n';

type SourceChars<'a> = Chain<CharIndices<'a>, Once<(usize, char)>>;

/// Cursor over the characters of the source code, with
/// one character of lookahead.
///
/// The cursor only moves forward. Once the source and the
/// sentinel newline are exhausted, the cursor rests on
/// [`EOF_CHAR`] for good.
pub(crate) struct Cursor<'a> {
    /// The `MultiPeek` peek cursor is restored after every
    /// peek, so peeking never looks further than one character.
    chars: MultiPeek<SourceChars<'a>>,
    /// Byte position and the character under the cursor.
    current: (usize, char),
    /// Position given to the end-of-file character, one
    /// past the sentinel.
    end: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        let chars = source
            .char_indices()
            .chain(iter::once((source.len(), SENTINEL_CHAR)));

        Self {
            chars: multipeek(chars),
            // Initial state is a non-existent character. The
            // owner must advance the cursor before reading.
            current: (0, EOF_CHAR),
            end: source.len() + SENTINEL_CHAR.len_utf8(),
        }
    }

    /// Character under the cursor.
    #[inline]
    pub(crate) fn current(&self) -> char {
        self.current.1
    }

    /// Byte position of the character under the cursor.
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.current.0
    }

    /// Advance the cursor and return the new current character.
    pub(crate) fn next(&mut self) -> char {
        self.current = self.chars.next().unwrap_or((self.end, EOF_CHAR));
        self.current.1
    }

    /// The character after the current one, without advancing.
    pub(crate) fn peek(&mut self) -> char {
        self.chars.reset_peek();
        let c = self.chars.peek().map(|(_, c)| *c).unwrap_or(EOF_CHAR);
        self.chars.reset_peek();
        c
    }

    /// Indicates if the cursor is past the sentinel.
    ///
    /// Source text may contain null-bytes, so an [`EOF_CHAR`]
    /// must be confirmed with this check.
    #[inline]
    pub(crate) fn at_end(&self) -> bool {
        self.current.0 >= self.end
    }
}
