//! Translate command - C source file to C# class.

use crate::config::NumportConfig;
use crate::io;
use anyhow::Context;
use clap::Args;
use numport_translate::{Container, dialect_for_name, dialect_for_path, translate, writer_for_language};
use std::path::{Path, PathBuf};

/// Translate command arguments
#[derive(Args)]
pub struct TranslateArgs {
    /// C source file to translate
    pub input: PathBuf,

    /// Output file (defaults to the input path with a .cs extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Dialect name (picked from the input file name if not specified)
    #[arg(short, long)]
    pub dialect: Option<String>,

    /// Namespace for the generated class (overrides config)
    #[arg(long)]
    pub namespace: Option<String>,

    /// Class name (defaults to the input file stem)
    #[arg(long)]
    pub class: Option<String>,

    /// Print to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// Run the translate command
pub fn run(args: TranslateArgs, config: &NumportConfig) -> anyhow::Result<()> {
    let dialect = match &args.dialect {
        Some(name) => dialect_for_name(name).with_context(|| format!("unknown dialect `{name}`"))?,
        None => dialect_for_path(&args.input).with_context(|| {
            format!(
                "no dialect registered for {}; pass --dialect",
                args.input.display()
            )
        })?,
    };
    let writer = writer_for_language("csharp").context("no C# writer registered")?;

    let class_name = match args.class {
        Some(class) => class,
        None => file_stem(&args.input)?,
    };
    let namespace = args
        .namespace
        .unwrap_or_else(|| config.namespace().to_string());
    let container = Container::new(namespace, class_name);

    let lines = io::read_lines(&args.input)?;
    let document = translate(&lines, &dialect, writer, &container)
        .with_context(|| format!("failed to translate {}", args.input.display()))?;

    if args.stdout {
        print!("{document}");
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension(writer.extension()));
    io::write_document(&output, &document)?;
    tracing::info!(
        input = %args.input.display(),
        output = %output.display(),
        dialect = %dialect.name,
        lines = document.lines().len(),
        "translated"
    );
    Ok(())
}

fn file_stem(path: &Path) -> anyhow::Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(String::from)
        .with_context(|| format!("cannot derive a class name from {}", path.display()))
}
