//! Conversion helpers that render raw path text for a fixed target platform.
//!
//! These do not depend on the host: converting to Windows syntax produces the
//! same string whether the binary runs on Linux, macOS, or Windows.

use super::types::Platform;
use super::unipath::UniPath;

/// Parse `input` and render it in `platform` syntax.
///
/// # Examples
///
/// ```
/// use crosspath::path::{convert_to, Platform};
///
/// assert_eq!(convert_to("c:\\one\\..\\two", Platform::Posix), "/c/two");
/// assert_eq!(convert_to("/dev/null", Platform::Windows), "\\dev\\null");
/// ```
#[must_use]
pub fn convert_to(input: &str, platform: Platform) -> String {
    UniPath::parse(input).render(platform)
}

/// Parse `input` and render it in Windows syntax.
///
/// # Examples
///
/// ```
/// use crosspath::path::convert_to_msw;
///
/// assert_eq!(convert_to_msw("/c/one"), "c:\\one");
/// assert_eq!(convert_to_msw("c:\\one"), "c:\\one");
/// assert_eq!(convert_to_msw("ex/why/"), "ex\\why\\");
/// ```
#[must_use]
pub fn convert_to_msw(input: &str) -> String {
    convert_to(input, Platform::Windows)
}

/// Parse `input` and render it for the platform this binary was built for.
#[must_use]
pub fn convert_to_host(input: &str) -> String {
    convert_to(input, Platform::HOST)
}
