//! Configuration system for crosspath.
//!
//! Settings come from up to four layers, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`CROSSPATH_*`)
//! 3. A configuration file (`~/.crosspath/config.yaml`, or an explicit path)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use crosspath::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("rendering for {:?}", config.platform);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::Config;
