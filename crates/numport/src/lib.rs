//! numport - keep hand-ported numeric kernels in sync with their C upstream.
//!
//! The translation itself lives in `numport-translate`; this crate adds
//! configuration, file I/O and the `numport` command line.

pub mod commands;
pub mod config;
pub mod io;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Translate Ooura-style numeric C sources into C#.
#[derive(Parser)]
#[command(name = "numport", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Project root used to locate .numport/config.toml
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Translate a C source file into a C# class
    Translate(commands::translate::TranslateArgs),
    /// List registered dialects
    Dialects(commands::dialects::DialectsArgs),
    /// Write helper files the translated code depends on
    Support(commands::support::SupportArgs),
}

/// Load config, register configured dialects, and dispatch.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::NumportConfig::load(&cli.root);
    config.register_dialects()?;

    match cli.command {
        Command::Translate(args) => commands::translate::run(args, &config),
        Command::Dialects(args) => commands::dialects::run(args),
        Command::Support(args) => commands::support::run(args, &config),
    }
}
