//! Environment variable handling for configuration overrides.
//!
//! `CROSSPATH_*` variables override values read from configuration files.

use std::env;

use crate::config::schema::Config;
use crate::error::Result;
use crate::logging::LOG_MODE_ENV;

/// Overrides [`Config::display_name`].
pub const DISPLAY_NAME_ENV: &str = "CROSSPATH_DISPLAY_NAME";

/// Overrides [`Config::platform`].
pub const PLATFORM_ENV: &str = "CROSSPATH_PLATFORM";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use crosspath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a platform or log mode value is not recognized.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(name) = env::var(DISPLAY_NAME_ENV) {
            config.display_name = Some(name);
        }

        if let Ok(platform) = env::var(PLATFORM_ENV) {
            config.platform = Some(platform.parse()?);
        }

        if let Ok(mode) = env::var(LOG_MODE_ENV) {
            config.log_mode = Some(mode.parse()?);
        }

        Ok(())
    }
}
