//! Dialects command - list registered dialects.

use clap::Args;
use numport_translate::registry::dialect_summaries;

/// Dialects command arguments
#[derive(Args)]
pub struct DialectsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the dialects command
pub fn run(args: DialectsArgs) -> anyhow::Result<()> {
    let summaries = dialect_summaries();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for summary in summaries {
        let sources = if summary.sources.is_empty() {
            "-".to_string()
        } else {
            summary.sources.join(", ")
        };
        println!("{}", summary.name);
        println!("  sources:       {sources}");
        println!("  declarations:  {}", summary.declaration);
        println!("  conditionals:  {}", summary.conditionals);
        println!("  substitutions: {}", summary.substitutions);
    }
    Ok(())
}
