//! Cross-platform path handling.
//!
//! This module parses paths written in either POSIX or Windows surface
//! syntax into a single normalized representation, [`UniPath`], and renders
//! them back out for any target platform.
//!
//! # Key Concepts
//!
//! ## Classification
//!
//! Raw text is classified by its leading characters:
//! - `c:` (letter + colon) is a drive root
//! - `/c/` (separator + single letter + separator) is the same drive root
//! - any other leading `/` or `\` is the POSIX root
//! - everything else is relative
//!
//! Both `/` and `\` separate segments regardless of classification.
//!
//! ## Normalization
//!
//! `.` segments are dropped and `..` cancels the preceding real segment. A
//! relative path keeps a leading `..` it cannot resolve; a rooted path drops
//! any `..` that would climb above the root.
//!
//! ## Rendering
//!
//! - [`UniPath::uni_string`]: portable form (`/c/one/two`)
//! - [`UniPath::native_string`]: the path's own platform syntax (`c:\one\two`)
//! - [`UniPath::render`] and [`convert_to`]: an explicit target platform
//!
//! # Examples
//!
//! ```
//! use crosspath::path::{convert_to_msw, UniPath};
//!
//! let base = UniPath::parse("/c/one");
//! let joined = &base / "two\\..\\three/";
//! assert_eq!(joined.uni_string(), "/c/one/three/");
//! assert_eq!(joined.native_string(), "c:\\one\\three\\");
//!
//! assert_eq!(convert_to_msw("/c/one"), convert_to_msw("c:\\one"));
//! ```

mod convert;
mod join;
pub mod normalize;
pub mod parse;
mod types;
mod unipath;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use convert::{convert_to, convert_to_host, convert_to_msw};
pub use types::{Platform, Root};
pub use unipath::UniPath;
