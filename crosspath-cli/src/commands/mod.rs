//! CLI command implementations.
//!
//! - `render`: Show how paths render on each platform
//! - `join`: Concatenate paths left to right
//! - `tokenize`: Parse `key = value, value` lines
//! - `samples`: Print the fixed sample report
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod join;
pub mod render;
pub mod samples;
pub mod tokenize;

pub use completions::CompletionsCommand;
pub use join::JoinCommand;
pub use render::RenderCommand;
pub use samples::SamplesCommand;
pub use tokenize::TokenizeCommand;
