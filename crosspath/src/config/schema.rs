//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::logging::LogLevel;
use crate::path::Platform;

/// Display name used when no source sets one.
pub const DEFAULT_DISPLAY_NAME: &str = "crosspath";

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; the accessor
/// methods supply the defaults.
///
/// # Examples
///
/// ```
/// use crosspath::config::Config;
/// use crosspath::path::Platform;
///
/// let config: Config = serde_yaml::from_str("platform: windows\n").unwrap();
/// assert_eq!(config.platform, Some(Platform::Windows));
/// assert_eq!(config.display_name(), "crosspath");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name shown in diagnostics.
    pub display_name: Option<String>,

    /// Platform used for native renderings when none is given explicitly.
    pub platform: Option<Platform>,

    /// Logging verbosity.
    pub log_mode: Option<LogLevel>,
}

impl Config {
    /// The configured display name, or the default.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(DEFAULT_DISPLAY_NAME)
    }

    /// The configured log level, or `Normal`.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_mode.unwrap_or(LogLevel::Normal)
    }

    /// Check the field values.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the display name is set but blank.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.display_name {
            if name.trim().is_empty() {
                return Err(Error::Validation {
                    field: "display_name".into(),
                    message: "must not be empty".into(),
                });
            }
        }
        Ok(())
    }

    /// Overwrite fields with every value `source` sets.
    pub fn merge_from(&mut self, source: &Config) {
        if source.display_name.is_some() {
            self.display_name.clone_from(&source.display_name);
        }
        if source.platform.is_some() {
            self.platform = source.platform;
        }
        if source.log_mode.is_some() {
            self.log_mode = source.log_mode;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.display_name(), DEFAULT_DISPLAY_NAME);
        assert_eq!(config.log_level(), LogLevel::Normal);
        assert_eq!(config.platform, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "display_name: samples\nplatform: posix\nlog_mode: quiet\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.display_name(), "samples");
        assert_eq!(config.platform, Some(Platform::Posix));
        assert_eq!(config.log_level(), LogLevel::Quiet);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = serde_yaml::from_str("colour: blue\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_display_name_invalid() {
        let config = Config {
            display_name: Some("  ".into()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::Validation { field, .. }) if field == "display_name"
        ));
    }

    #[test]
    fn test_merge_from_overwrites_set_fields_only() {
        let mut base = Config {
            display_name: Some("base".into()),
            platform: Some(Platform::Posix),
            log_mode: None,
        };
        let overlay = Config {
            platform: Some(Platform::Windows),
            log_mode: Some(LogLevel::Verbose),
            ..Default::default()
        };
        base.merge_from(&overlay);
        assert_eq!(base.display_name(), "base");
        assert_eq!(base.platform, Some(Platform::Windows));
        assert_eq!(base.log_mode, Some(LogLevel::Verbose));
    }
}
