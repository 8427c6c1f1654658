//! Build script for crosspath-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared again here.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("crosspath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render cross-platform paths and tokenize key/value text")
        .long_about(
            "Parse paths written in POSIX or Windows syntax, normalize them, join them, \
             and render them for either platform; split key = value, value text into tokens",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of ~/.crosspath/config.yaml")
                .value_name("PATH")
                .global(true)
                .env("CROSSPATH_CONFIG"),
        )
        .subcommands(vec![
            Command::new("render")
                .about("Show how paths render on each platform")
                .long_about("Print the portable, Windows, and native rendering of each path"),
            Command::new("join")
                .about("Concatenate paths left to right")
                .long_about(
                    "Join paths in order; an absolute path replaces everything before it",
                ),
            Command::new("tokenize")
                .about("Parse key = value, value lines")
                .long_about("Split a document into lines and each line into a key and values"),
            Command::new("samples")
                .about("Print the fixed sample report")
                .long_about("Run the tokenizer and path samples and print the report"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR").ok_or_else(|| std::io::Error::other("OUT_DIR not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("crosspath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
