//! Path normalization functions.
//!
//! This module reduces a segment sequence by:
//! - Dropping `.` segments
//! - Cancelling `..` against the preceding real segment
//! - Keeping unresolvable `..` on relative paths
//! - Discarding `..` that would climb above a root

use super::types::Root;

const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// Resolve `.` and `..` segments for a path anchored at `root`.
///
/// Empty segments are dropped as well, so the output never contains an empty
/// string.
///
/// # Examples
///
/// ```
/// use crosspath::path::normalize::resolve_segments;
/// use crosspath::path::Root;
///
/// // Resolves . and ..
/// let resolved = resolve_segments(Root::Posix, ["a", ".", "b", "..", "c"]);
/// assert_eq!(resolved, ["a", "c"]);
///
/// // A relative path keeps the .. it cannot resolve
/// let resolved = resolve_segments(Root::Relative, ["..", "..", "ex"]);
/// assert_eq!(resolved, ["..", "..", "ex"]);
///
/// // A rooted path cannot climb above its root
/// let resolved = resolve_segments(Root::Drive('c'), ["..", "one"]);
/// assert_eq!(resolved, ["one"]);
/// ```
pub fn resolve_segments<'a, I>(root: Root, segments: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut resolved: Vec<String> = Vec::new();

    for segment in segments {
        match segment {
            "" | CURRENT_DIR => {}
            PARENT_DIR => match resolved.last() {
                Some(top) if top != PARENT_DIR => {
                    resolved.pop();
                }
                // Already at the root - nowhere further up to go
                _ if root.is_absolute() => {}
                _ => resolved.push(PARENT_DIR.to_string()),
            },
            real => resolved.push(real.to_string()),
        }
    }

    resolved
}

/// Whether a segment sequence is already in normal form for `root`.
///
/// # Examples
///
/// ```
/// use crosspath::path::normalize::is_normalized;
/// use crosspath::path::Root;
///
/// assert!(is_normalized(Root::Relative, ["..", "ex"]));
/// assert!(!is_normalized(Root::Posix, ["..", "ex"]));
/// assert!(!is_normalized(Root::Relative, ["ex", ".."]));
/// ```
pub fn is_normalized<'a, I>(root: Root, segments: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen_real = false;
    for segment in segments {
        match segment {
            "" | CURRENT_DIR => return false,
            PARENT_DIR if seen_real || root.is_absolute() => return false,
            PARENT_DIR => {}
            _ => seen_real = true,
        }
    }
    true
}
