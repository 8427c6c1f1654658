//! The [`UniPath`] value type.

use std::fmt;

use super::normalize::resolve_segments;
use super::parse::{has_trailing_separator, segments, split_root};
use super::types::{Platform, Root};

/// A normalized path that remembers which surface syntax anchored it.
///
/// `UniPath` accepts POSIX and Windows spellings alike, resolves `.` and `..`
/// on construction, and renders either portably ([`uni_string`]) or in a
/// platform's native syntax ([`native_string`], [`render`]).
///
/// # Examples
///
/// ```
/// use crosspath::UniPath;
///
/// let path = UniPath::parse("c:\\one\\..\\one\\two\\three");
/// assert_eq!(path.uni_string(), "/c/one/two/three");
/// assert_eq!(path.native_string(), "c:\\one\\two\\three");
/// ```
///
/// [`uni_string`]: UniPath::uni_string
/// [`native_string`]: UniPath::native_string
/// [`render`]: UniPath::render
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniPath {
    root: Root,
    segments: Vec<String>,
    trailing: bool,
}

impl UniPath {
    /// Parse and normalize raw path text.
    ///
    /// Never fails: unusual input normalizes to some well-defined path. The
    /// empty string is a relative path with no segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosspath::path::{Root, UniPath};
    ///
    /// let path = UniPath::parse("./ex/!why/");
    /// assert_eq!(path.root(), Root::Relative);
    /// assert_eq!(path.segments(), ["ex", "!why"]);
    /// assert!(path.has_trailing_separator());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let (root, rest) = split_root(input);
        Self {
            root,
            segments: resolve_segments(root, segments(rest)),
            trailing: has_trailing_separator(input),
        }
    }

    /// Build a path from parts, normalizing the segments for `root`.
    ///
    /// Segments containing separators are split further.
    #[must_use]
    pub fn from_parts<'a, I>(root: Root, parts: I, trailing: bool) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let root = match root {
            Root::Drive(letter) => Root::Drive(letter.to_ascii_lowercase()),
            other => other,
        };
        Self {
            root,
            segments: resolve_segments(root, parts.into_iter().flat_map(segments)),
            trailing,
        }
    }

    /// The root descriptor.
    #[must_use]
    pub fn root(&self) -> Root {
        self.root
    }

    /// The normalized segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether the most recent input that shaped this path ended in a separator.
    #[must_use]
    pub fn has_trailing_separator(&self) -> bool {
        self.trailing
    }

    /// Whether the path is anchored at a POSIX or drive root.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.root.is_absolute()
    }

    /// Whether the path has no root.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Whether the path is relative with no segments (renders as "").
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_relative() && self.segments.is_empty()
    }

    /// The drive letter, for drive-rooted paths.
    #[must_use]
    pub fn drive(&self) -> Option<char> {
        match self.root {
            Root::Drive(letter) => Some(letter),
            Root::Relative | Root::Posix => None,
        }
    }

    /// The last segment, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosspath::UniPath;
    ///
    /// assert_eq!(UniPath::parse("/dev/null").file_name(), Some("null"));
    /// assert_eq!(UniPath::parse("c:\\").file_name(), None);
    /// ```
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.segments
            .last()
            .filter(|segment| segment.as_str() != "..")
            .map(String::as_str)
    }

    /// The platform whose syntax [`native_string`](Self::native_string) uses.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.root.semantic_platform()
    }

    /// Whether two paths have the same root and segments, ignoring the
    /// trailing-separator flag.
    #[must_use]
    pub fn same_location(&self, other: &Self) -> bool {
        self.root == other.root && self.segments == other.segments
    }

    /// Portable rendering: `/x/` for drive `x`, `/` for the POSIX root, `/`
    /// between segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosspath::UniPath;
    ///
    /// assert_eq!(UniPath::parse("c:").uni_string(), "/c/");
    /// assert_eq!(UniPath::parse("c:/one/").uni_string(), "/c/one/");
    /// assert_eq!(UniPath::parse("ex\\why").uni_string(), "ex/why");
    /// ```
    #[must_use]
    pub fn uni_string(&self) -> String {
        self.render(Platform::Posix)
    }

    /// Native rendering for the path's own semantic platform.
    ///
    /// Drive-rooted paths render as `x:\seg\seg`; everything else uses POSIX
    /// syntax.
    #[must_use]
    pub fn native_string(&self) -> String {
        self.render(self.platform())
    }

    /// Render with the separator and root syntax of `platform`.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosspath::path::{Platform, UniPath};
    ///
    /// let path = UniPath::parse("/dev/null");
    /// assert_eq!(path.render(Platform::Windows), "\\dev\\null");
    ///
    /// let path = UniPath::parse("/c/one/");
    /// assert_eq!(path.render(Platform::Windows), "c:\\one\\");
    /// ```
    #[must_use]
    pub fn render(&self, platform: Platform) -> String {
        let separator = platform.separator();
        let mut out = String::with_capacity(
            4 + self.segments.iter().map(|s| s.len() + 1).sum::<usize>(),
        );

        match (self.root, platform) {
            // `c:x` would read back as a drive path
            (Root::Relative, _) if self.starts_with_drive_spelling() => {
                out.push('.');
                out.push(separator);
            }
            (Root::Relative, _) => {}
            (Root::Posix, _) => out.push(separator),
            (Root::Drive(letter), Platform::Posix) => {
                out.push('/');
                out.push(letter);
                out.push('/');
            }
            (Root::Drive(letter), Platform::Windows) => {
                out.push(letter);
                out.push(':');
                out.push('\\');
            }
        }

        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                out.push(separator);
            }
            out.push_str(segment);
        }

        if self.trailing && !self.segments.is_empty() {
            out.push(separator);
        }

        out
    }

    fn starts_with_drive_spelling(&self) -> bool {
        self.segments.first().is_some_and(|first| {
            matches!(first.as_bytes(), [letter, b':', ..] if letter.is_ascii_alphabetic())
        })
    }

    pub(super) fn into_parts(self) -> (Root, Vec<String>, bool) {
        (self.root, self.segments, self.trailing)
    }

    pub(super) fn from_normalized(root: Root, segments: Vec<String>, trailing: bool) -> Self {
        Self {
            root,
            segments,
            trailing,
        }
    }
}

impl Default for UniPath {
    fn default() -> Self {
        Self::parse("")
    }
}

impl From<&str> for UniPath {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<String> for UniPath {
    fn from(input: String) -> Self {
        Self::parse(&input)
    }
}

impl From<&String> for UniPath {
    fn from(input: &String) -> Self {
        Self::parse(input)
    }
}

impl fmt::Display for UniPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uni_string())
    }
}
