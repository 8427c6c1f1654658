//! Library exports for crosspath-cli.
//!
//! This module exports the CLI structure so integration tests and benches
//! can reach it without spawning the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
