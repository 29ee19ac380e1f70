//! End-to-end caption generation.
//!
//! Config + prompt CSV -> validated prompts -> rendered document -> file.
//! The default paths are plain constants used by the CLI; every function here
//! takes its paths explicitly.

use crate::config::WorkflowConfig;
use crate::error::Result;
use crate::output::{render_document, save_captions};
use crate::prompt::{Prompt, load_prompts};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default location of the workflow config, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/workflow.yaml";

/// Default location of the generated caption document.
pub const DEFAULT_OUTPUT_PATH: &str = "outputs/captions.md";

/// Outcome of a successful [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub prompt_count: usize,
    pub output_path: PathBuf,
}

/// Load every prompt from `csv_path`, stopping at the first invalid row.
pub fn collect_prompts<P: AsRef<Path>>(csv_path: P) -> Result<Vec<Prompt>> {
    load_prompts(csv_path)?.collect()
}

/// Render the caption document for `csv_path` without writing it.
pub fn render(csv_path: &Path, config: &WorkflowConfig) -> Result<String> {
    let prompts = collect_prompts(csv_path)?;
    Ok(render_document(&prompts, config))
}

/// Generate captions from `csv_path` into `output_path`.
///
/// `config_path` falls back to [`DEFAULT_CONFIG_PATH`] when `None`. Nothing is
/// written unless every prompt row is valid.
pub fn run(csv_path: &Path, output_path: &Path, config_path: Option<&Path>) -> Result<RunSummary> {
    let config_path = config_path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH));
    let config = WorkflowConfig::load(config_path)?;
    let prompts = collect_prompts(csv_path)?;

    save_captions(&prompts, output_path, &config)?;
    info!(
        project = %config.project_name,
        prompts = prompts.len(),
        "caption run complete"
    );

    Ok(RunSummary {
        prompt_count: prompts.len(),
        output_path: output_path.to_path_buf(),
    })
}
