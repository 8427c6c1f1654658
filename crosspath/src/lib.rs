#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # crosspath
//!
//! Cross-platform path normalization and delimiter-driven tokenizing.
//!
//! A [`UniPath`] reads POSIX and Windows spellings alike, resolves `.` and
//! `..`, and renders for either platform. A [`Tokenizer`] splits borrowed
//! text into trimmed tokens, which [`Assignment`] uses to read
//! `key = v1, v2` lines.
//!
//! ## Core Types
//!
//! - [`UniPath`], [`Root`] and [`Platform`]: path values and rendering targets
//! - [`Tokenizer`] and [`Assignment`]: text splitting
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use crosspath::{convert_to_msw, UniPath};
//!
//! let path = UniPath::parse("/c/one/./two/../three");
//! assert_eq!(path.uni_string(), "/c/one/three");
//! assert_eq!(path.native_string(), "c:\\one\\three");
//!
//! let joined = UniPath::parse("c:/base") / "sub/";
//! assert_eq!(joined.uni_string(), "/c/base/sub/");
//!
//! assert_eq!(convert_to_msw("/x/y/z"), "x:\\y\\z");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod report;
pub mod tokenizer;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{convert_to, convert_to_host, convert_to_msw, Platform, Root, UniPath};
pub use tokenizer::{Assignment, Tokenizer};
