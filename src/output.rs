//! Caption document assembly and writing.
//!
//! Prompts are paired with pillars positionally: the prompt at index `i` gets
//! `content_pillars[i % len]`. Each prompt becomes one Markdown section under
//! a single `# Generated Captions` heading.

use crate::caption::render_caption;
use crate::config::WorkflowConfig;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::prompt::Prompt;
use std::path::Path;
use tracing::info;

/// Top-level heading of the generated document.
pub const DOCUMENT_HEADING: &str = "# Generated Captions";

/// Pair each prompt with its pillar, cycling through the configured pillars.
pub fn assign_pillars<'a>(
    prompts: &'a [Prompt],
    config: &'a WorkflowConfig,
) -> impl Iterator<Item = (&'a Prompt, &'a str)> + 'a {
    prompts
        .iter()
        .enumerate()
        .map(move |(i, prompt)| (prompt, config.pillar_for(i)))
}

/// Render the full review document.
///
/// The result ends with exactly one newline.
pub fn render_document(prompts: &[Prompt], config: &WorkflowConfig) -> String {
    let mut lines: Vec<String> = vec![DOCUMENT_HEADING.to_string(), String::new()];

    for (prompt, pillar) in assign_pillars(prompts, config) {
        lines.push(format!("## {}", prompt.title));
        lines.push(format!("**Pillar:** {}", pillar));
        lines.push(String::new());
        lines.push(render_caption(prompt, pillar, config));
        if prompt.has_call_to_action() {
            lines.push(String::new());
            lines.push(format!("**Call to Action:** {}", prompt.call_to_action));
        }
        lines.push(String::new());
    }

    let mut output = lines.join("\n").trim().to_string();
    output.push('\n');
    output
}

/// Render the document and write it to `output_path`.
///
/// The parent directory is created if it does not exist.
pub fn save_captions<P: AsRef<Path>>(
    prompts: &[Prompt],
    output_path: P,
    config: &WorkflowConfig,
) -> Result<()> {
    let output_path = output_path.as_ref();
    let document = render_document(prompts, config);
    atomic_write_file(output_path, &document)?;

    info!(
        path = %output_path.display(),
        prompts = prompts.len(),
        "wrote captions"
    );
    Ok(())
}
