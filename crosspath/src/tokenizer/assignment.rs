//! `key = value, value` lines built from two nested tokenizers.

use std::fmt;

use serde::Serialize;

use super::Tokenizer;

/// Line separators recognized by [`Assignment::parse_document`].
pub const LINE_DELIMITERS: &str = "\r\n";

/// A parsed `key = value[, value...]` line.
///
/// Both the key and the values borrow from the parsed text.
///
/// # Examples
///
/// ```
/// use crosspath::tokenizer::Assignment;
///
/// let assignment = Assignment::parse("--lvalue = rvalue1, rvalue2").unwrap();
/// assert_eq!(assignment.key(), "--lvalue");
/// assert_eq!(assignment.values(), ["rvalue1", "rvalue2"]);
/// assert_eq!(assignment.to_string(), "--lvalue=rvalue1,rvalue2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment<'a> {
    key: &'a str,
    values: Vec<&'a str>,
}

impl<'a> Assignment<'a> {
    /// Parse a line using `=` between key and values and `,` between values.
    ///
    /// Returns `None` when the line has no key: it is blank, or nothing
    /// precedes the first `=`.
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        Self::parse_with(line, '=', ',')
    }

    /// Parse a line with caller-chosen key and value delimiters.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosspath::tokenizer::Assignment;
    ///
    /// let assignment = Assignment::parse_with("PATH: /bin; /usr/bin", ':', ';').unwrap();
    /// assert_eq!(assignment.values(), ["/bin", "/usr/bin"]);
    /// ```
    #[must_use]
    pub fn parse_with(line: &'a str, key_delimiter: char, value_delimiter: char) -> Option<Self> {
        let mut tokenizer = Tokenizer::new(line);
        let key = tokenizer
            .next_token(key_delimiter)
            .filter(|key| !key.is_empty())?;
        let values = tokenizer.tokens(value_delimiter).collect();
        Some(Self { key, values })
    }

    /// Parse every line of `text` that carries a key.
    ///
    /// Lines may end in `\n` or `\r\n`; blank lines are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosspath::tokenizer::Assignment;
    ///
    /// let doc = "LVALUE = RVALUE\nLVALUE2 = RVALUE(DOS)\r\n\nLINE4 = FINISHED\n";
    /// let keys: Vec<_> = Assignment::parse_document(doc)
    ///     .iter()
    ///     .map(|a| a.key())
    ///     .collect();
    /// assert_eq!(keys, ["LVALUE", "LVALUE2", "LINE4"]);
    /// ```
    #[must_use]
    pub fn parse_document(text: &'a str) -> Vec<Self> {
        Self::parse_document_with(text, '=', ',')
    }

    /// [`parse_document`](Self::parse_document) with caller-chosen delimiters.
    #[must_use]
    pub fn parse_document_with(
        text: &'a str,
        key_delimiter: char,
        value_delimiter: char,
    ) -> Vec<Self> {
        Tokenizer::new(text)
            .tokens(LINE_DELIMITERS)
            .filter_map(|line| Self::parse_with(line, key_delimiter, value_delimiter))
            .collect()
    }

    /// The text before the key delimiter.
    #[must_use]
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// The values after the key delimiter, in order.
    #[must_use]
    pub fn values(&self) -> &[&'a str] {
        &self.values
    }
}

impl fmt::Display for Assignment<'_> {
    /// `key`, then `=first`, then `,next` for each further value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key)?;
        for (index, value) in self.values.iter().enumerate() {
            f.write_str(if index == 0 { "=" } else { "," })?;
            f.write_str(value)?;
        }
        Ok(())
    }
}
