//! Support command - emit helper files translated code depends on.

use crate::config::NumportConfig;
use crate::io;
use anyhow::Context;
use clap::Args;
use numport_translate::writer_for_language;
use std::path::PathBuf;

/// Support command arguments
#[derive(Args)]
pub struct SupportArgs {
    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Namespace for the helpers (overrides config)
    #[arg(long)]
    pub namespace: Option<String>,
}

/// Run the support command
pub fn run(args: SupportArgs, config: &NumportConfig) -> anyhow::Result<()> {
    let writer = writer_for_language("csharp").context("no C# writer registered")?;
    let namespace = args.namespace.as_deref().unwrap_or(config.namespace());

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    for file in writer.support_files(namespace) {
        let path = args.output.join(file.file_name);
        io::write_document(&path, &file.document)?;
        println!("{}", path.display());
    }
    Ok(())
}
