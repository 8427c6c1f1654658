//! Core types for path handling.
//!
//! This module defines the root descriptor carried by every [`UniPath`] and
//! the target platforms a path can be rendered for.
//!
//! [`UniPath`]: super::UniPath

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The anchor of a path.
///
/// # Examples
///
/// ```
/// use crosspath::path::{Root, UniPath};
///
/// assert_eq!(UniPath::parse("ex/why").root(), Root::Relative);
/// assert_eq!(UniPath::parse("/dev/null").root(), Root::Posix);
/// assert_eq!(UniPath::parse("C:\\one").root(), Root::Drive('c'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Root {
    /// No anchor; the path is relative to an unknown base.
    Relative,

    /// The POSIX filesystem root `/`.
    Posix,

    /// A lettered drive root. The letter is always stored lowercase.
    Drive(char),
}

impl Root {
    /// Whether this root anchors the path.
    #[must_use]
    pub const fn is_absolute(self) -> bool {
        !matches!(self, Self::Relative)
    }

    /// The platform whose syntax this root naturally belongs to.
    ///
    /// Relative paths have no natural platform and render in POSIX syntax,
    /// keeping native output independent of the host.
    #[must_use]
    pub const fn semantic_platform(self) -> Platform {
        match self {
            Self::Drive(_) => Platform::Windows,
            Self::Relative | Self::Posix => Platform::Posix,
        }
    }
}

/// A target platform for native rendering.
///
/// # Examples
///
/// ```
/// use crosspath::path::Platform;
///
/// assert_eq!("msw".parse::<Platform>().unwrap(), Platform::Windows);
/// assert_eq!(Platform::Windows.separator(), '\\');
/// assert_eq!(Platform::Posix.to_string(), "posix");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum Platform {
    /// Forward slashes, `/` root, drives rendered as `/x/`.
    #[value(alias = "unix")]
    #[serde(alias = "unix")]
    Posix,

    /// Backslashes, drives rendered as `x:\`.
    #[value(alias = "msw", alias = "win")]
    #[serde(alias = "msw", alias = "win")]
    Windows,
}

impl Platform {
    /// The platform this binary was compiled for.
    #[cfg(windows)]
    pub const HOST: Self = Self::Windows;

    /// The platform this binary was compiled for.
    #[cfg(not(windows))]
    pub const HOST: Self = Self::Posix;

    /// The segment separator used when rendering for this platform.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "posix" | "unix" => Ok(Self::Posix),
            "windows" | "win" | "msw" => Ok(Self::Windows),
            _ => Err(Error::InvalidPlatform {
                value: s.to_string(),
            }),
        }
    }
}
