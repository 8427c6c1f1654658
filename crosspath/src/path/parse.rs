//! Classification of raw path text.
//!
//! Both `/` and `\` are accepted as separators everywhere, so a string can be
//! classified without knowing which platform produced it.

use super::types::Root;

/// Whether `c` separates path segments in either surface syntax.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Split raw path text into its root descriptor and the remaining text.
///
/// Rules, checked in order:
/// 1. `x:` (a single ASCII letter and a colon) is a drive root.
/// 2. `/x/` or `/x\` is the same drive root written POSIX style; any other
///    leading separator is the POSIX root.
/// 3. Everything else is relative.
///
/// The remainder may still start with a separator; segment splitting skips
/// empty pieces.
///
/// # Examples
///
/// ```
/// use crosspath::path::parse::split_root;
/// use crosspath::path::Root;
///
/// assert_eq!(split_root("C:\\one"), (Root::Drive('c'), "\\one"));
/// assert_eq!(split_root("/c/one"), (Root::Drive('c'), "/one"));
/// assert_eq!(split_root("/dev/null"), (Root::Posix, "/dev/null"));
/// assert_eq!(split_root("../ex"), (Root::Relative, "../ex"));
/// ```
#[must_use]
pub fn split_root(input: &str) -> (Root, &str) {
    match input.as_bytes() {
        [letter, b':', ..] if letter.is_ascii_alphabetic() => {
            (Root::Drive(drive_letter(*letter)), &input[2..])
        }
        [b'/', letter, sep, ..] if letter.is_ascii_alphabetic() && is_separator(char::from(*sep)) => {
            (Root::Drive(drive_letter(*letter)), &input[2..])
        }
        [first, ..] if is_separator(char::from(*first)) => (Root::Posix, input),
        _ => (Root::Relative, input),
    }
}

/// Iterate over the non-empty segments of `text`, splitting on either separator.
pub fn segments(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|segment| !segment.is_empty())
}

/// Whether raw path text ends in a separator.
#[must_use]
pub fn has_trailing_separator(input: &str) -> bool {
    input.ends_with(is_separator)
}

fn drive_letter(byte: u8) -> char {
    char::from(byte.to_ascii_lowercase())
}
