//! Implementation of the `generate` command.

use crate::cli::GenerateArgs;
use crate::config::WorkflowConfig;
use crate::error::Result;
use crate::pipeline;

/// Execute the `generate` command.
///
/// With `--stdout` the document is printed and no file is touched; otherwise
/// it is written to `--output`.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    if args.stdout {
        let config = WorkflowConfig::load(&args.config)?;
        print!("{}", pipeline::render(&args.csv, &config)?);
        return Ok(());
    }

    let summary = pipeline::run(&args.csv, &args.output, Some(args.config.as_path()))?;
    println!(
        "Wrote {} caption(s) to {}",
        summary.prompt_count,
        summary.output_path.display()
    );
    Ok(())
}
