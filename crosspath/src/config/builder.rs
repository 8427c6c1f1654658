//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds a [`Config`] from defaults, a file, the environment, and
/// programmatic overrides, in increasing order of precedence.
///
/// # Examples
///
/// ```
/// use crosspath::config::{Config, ConfigBuilder};
/// use crosspath::path::Platform;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         platform: Some(Platform::Windows),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.platform, Some(Platform::Windows));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads the user configuration and environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path` instead of the user configuration file.
    ///
    /// An explicit file must exist; the user file may be absent.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `CROSSPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layer `config` over everything else. Later calls win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// value is unrecognized, or the merged configuration is invalid.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let loaded = match &self.file {
                Some(path) => Some(ConfigLoader::load_file(path)?),
                None => ConfigLoader::load_user_config()?,
            };
            if let Some(file_config) = loaded {
                config.merge_from(&file_config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for over in &self.overrides {
            config.merge_from(over);
        }

        config.validate()?;
        log::debug!("resolved configuration: {config:?}");
        Ok(config)
    }
}
