//! Path concatenation.
//!
//! `A / B` follows shell join semantics: an absolute right-hand side replaces
//! the base, a relative one is appended and the combined sequence is
//! normalized again under the base's root.

use std::ops::Div;

use super::normalize::resolve_segments;
use super::unipath::UniPath;

impl UniPath {
    /// Concatenate `rhs` onto this path, producing a new path.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosspath::UniPath;
    ///
    /// let base = UniPath::parse("c:\\one\\two");
    ///
    /// // Relative right-hand side: appended, then normalized as a whole
    /// assert_eq!(base.join(&UniPath::parse("../ex/")).uni_string(), "/c/one/ex/");
    ///
    /// // Absolute right-hand side: replaces the base
    /// assert_eq!(base.join(&UniPath::parse("/dev/null")).uni_string(), "/dev/null");
    /// ```
    #[must_use]
    pub fn join(&self, rhs: &UniPath) -> UniPath {
        if rhs.is_absolute() {
            log::debug!("join: absolute {rhs} replaces {self}");
            return rhs.clone();
        }

        let combined = self
            .segments()
            .iter()
            .chain(rhs.segments())
            .map(String::as_str);
        let segments = resolve_segments(self.root(), combined);

        let trailing = if rhs.segments().is_empty() {
            self.has_trailing_separator()
        } else {
            rhs.has_trailing_separator()
        };

        UniPath::from_normalized(self.root(), segments, trailing)
    }

    /// Concatenate `rhs` onto this path, reusing this path's storage.
    #[must_use]
    pub fn into_joined(self, rhs: &UniPath) -> UniPath {
        if rhs.is_absolute() {
            return rhs.clone();
        }
        let (root, mut segments, trailing) = self.into_parts();
        segments.extend(rhs.segments().iter().cloned());
        let trailing = if rhs.segments().is_empty() {
            trailing
        } else {
            rhs.has_trailing_separator()
        };
        let segments = resolve_segments(root, segments.iter().map(String::as_str));
        UniPath::from_normalized(root, segments, trailing)
    }
}

impl Div<&UniPath> for &UniPath {
    type Output = UniPath;

    fn div(self, rhs: &UniPath) -> UniPath {
        self.join(rhs)
    }
}

impl Div<UniPath> for &UniPath {
    type Output = UniPath;

    fn div(self, rhs: UniPath) -> UniPath {
        self.join(&rhs)
    }
}

impl Div<&UniPath> for UniPath {
    type Output = UniPath;

    fn div(self, rhs: &UniPath) -> UniPath {
        self.into_joined(rhs)
    }
}

impl Div<UniPath> for UniPath {
    type Output = UniPath;

    fn div(self, rhs: UniPath) -> UniPath {
        self.into_joined(&rhs)
    }
}

impl Div<&str> for &UniPath {
    type Output = UniPath;

    fn div(self, rhs: &str) -> UniPath {
        self.join(&UniPath::parse(rhs))
    }
}

impl Div<&str> for UniPath {
    type Output = UniPath;

    fn div(self, rhs: &str) -> UniPath {
        self.into_joined(&UniPath::parse(rhs))
    }
}
