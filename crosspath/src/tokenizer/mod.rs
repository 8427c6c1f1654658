//! Delimiter-driven tokenizing of key/value and CSV-like text.
//!
//! A [`Tokenizer`] borrows its input and hands out trimmed sub-slices of it.
//! Leading and trailing blanks (space and tab) are removed from every token;
//! whitespace inside a token is kept.
//!
//! Two kinds of delimiter are supported through the [`Delimiter`] trait:
//!
//! - a single `char` splits on every occurrence, so `a,,b` yields an empty
//!   middle token;
//! - a delimiter set (`&str`, `[char; N]`, `&[char]`) treats a run of set
//!   members as one boundary, so `\r\n` and blank lines never yield empty
//!   tokens.
//!
//! # Examples
//!
//! ```
//! use crosspath::tokenizer::Tokenizer;
//!
//! let text = "name = crosspath\r\ntags = cli, path\n\n";
//! let mut lines = Tokenizer::new(text);
//! let mut keys = Vec::new();
//! while let Some(line) = lines.next_token("\r\n") {
//!     let mut fields = Tokenizer::new(line);
//!     keys.extend(fields.next_token('='));
//! }
//! assert_eq!(keys, ["name", "tags"]);
//! ```

mod assignment;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use assignment::{Assignment, LINE_DELIMITERS};

/// Whether `c` is trimmed from token edges.
#[must_use]
pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Something a [`Tokenizer`] can split on.
pub trait Delimiter {
    /// Whether `c` ends the current token.
    fn is_delimiter(&self, c: char) -> bool;

    /// Whether consecutive delimiters form a single boundary.
    fn collapses_runs(&self) -> bool;
}

impl Delimiter for char {
    fn is_delimiter(&self, c: char) -> bool {
        *self == c
    }

    fn collapses_runs(&self) -> bool {
        false
    }
}

impl Delimiter for &str {
    fn is_delimiter(&self, c: char) -> bool {
        self.contains(c)
    }

    fn collapses_runs(&self) -> bool {
        true
    }
}

impl Delimiter for &[char] {
    fn is_delimiter(&self, c: char) -> bool {
        self.contains(&c)
    }

    fn collapses_runs(&self) -> bool {
        true
    }
}

impl<const N: usize> Delimiter for [char; N] {
    fn is_delimiter(&self, c: char) -> bool {
        self.contains(&c)
    }

    fn collapses_runs(&self) -> bool {
        true
    }
}

/// A forward-only cursor over borrowed text.
///
/// # Examples
///
/// ```
/// use crosspath::tokenizer::Tokenizer;
///
/// let mut tok = Tokenizer::new("  a , b  ");
/// assert_eq!(tok.next_token(','), Some("a"));
/// assert_eq!(tok.next_token(','), Some("b"));
/// assert_eq!(tok.next_token(','), None);
/// assert_eq!(tok.next_token(','), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer<'a> {
    rest: &'a str,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    /// The input not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> &'a str {
        self.rest
    }

    /// Whether only blanks remain.
    ///
    /// Delimiters are not skipped: with `"\r\n"` left this returns `false`
    /// even though `next_token("\r\n")` would return `None`. Use
    /// [`is_exhausted_for`](Self::is_exhausted_for) to ask about a
    /// particular delimiter.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.rest.trim_start_matches(is_blank).is_empty()
    }

    /// Whether `next_token(delimiter)` would return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosspath::tokenizer::Tokenizer;
    ///
    /// let tok = Tokenizer::new("\r\n \n");
    /// assert!(!tok.is_exhausted());
    /// assert!(tok.is_exhausted_for("\r\n"));
    /// assert!(!tok.is_exhausted_for('\n'));
    /// ```
    #[must_use]
    pub fn is_exhausted_for<D: Delimiter>(&self, delimiter: D) -> bool {
        if delimiter.collapses_runs() {
            self.rest
                .trim_start_matches(|c: char| is_blank(c) || delimiter.is_delimiter(c))
                .is_empty()
        } else {
            self.is_exhausted()
        }
    }

    /// Extract the next token up to `delimiter`.
    ///
    /// Returns `None` once nothing but blanks remains; repeated calls keep
    /// returning `None`. The delimiter itself is consumed and never appears
    /// in a token.
    pub fn next_token<D: Delimiter>(&mut self, delimiter: D) -> Option<&'a str> {
        let start = if delimiter.collapses_runs() {
            self.rest
                .trim_start_matches(|c: char| is_blank(c) || delimiter.is_delimiter(c))
        } else {
            self.rest.trim_start_matches(is_blank)
        };

        if start.is_empty() {
            self.rest = start;
            return None;
        }

        let (span, rest) = match start.char_indices().find(|&(_, c)| delimiter.is_delimiter(c)) {
            Some((index, found)) => (&start[..index], &start[index + found.len_utf8()..]),
            None => (start, ""),
        };

        self.rest = rest;
        Some(span.trim_end_matches(is_blank))
    }

    /// Iterate over the remaining tokens split on `delimiter`.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosspath::tokenizer::Tokenizer;
    ///
    /// let tokens: Vec<_> = Tokenizer::new("L1\r\nL2\n\nL3").tokens("\r\n").collect();
    /// assert_eq!(tokens, ["L1", "L2", "L3"]);
    /// ```
    pub fn tokens<D: Delimiter>(self, delimiter: D) -> Tokens<'a, D> {
        Tokens {
            tokenizer: self,
            delimiter,
        }
    }
}

/// Iterator returned by [`Tokenizer::tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a, D> {
    tokenizer: Tokenizer<'a>,
    delimiter: D,
}

impl<'a, D: Delimiter + Copy> Iterator for Tokens<'a, D> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.tokenizer.next_token(self.delimiter)
    }
}

impl<D: Delimiter + Copy> std::iter::FusedIterator for Tokens<'_, D> {}
