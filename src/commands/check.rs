//! Implementation of the `check` command.
//!
//! Loads the config and every prompt exactly as `generate` would, then
//! reports the pillar assignment without writing anything.

use crate::cli::CheckArgs;
use crate::config::WorkflowConfig;
use crate::error::Result;
use crate::output::assign_pillars;
use crate::pipeline::collect_prompts;
use crate::prompt::Prompt;

/// Execute the `check` command.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = WorkflowConfig::load(&args.config)?;
    let prompts = collect_prompts(&args.csv)?;

    print!("{}", format_report(&prompts, &config));
    Ok(())
}

/// Build the human-readable check report.
fn format_report(prompts: &[Prompt], config: &WorkflowConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("Project: {}\n", config.project_name));
    out.push_str(&format!(
        "Pillars: {}\n",
        config.content_pillars.join(", ")
    ));
    out.push_str(&format!("Prompts: {}\n", prompts.len()));

    if !prompts.is_empty() {
        out.push('\n');
        for (i, (prompt, pillar)) in assign_pillars(prompts, config).enumerate() {
            let cta_marker = if prompt.has_call_to_action() { "" } else { " [no CTA]" };
            out.push_str(&format!(
                "  {:>3}. {} -> {}{}\n",
                i + 1,
                prompt.title,
                pillar,
                cta_marker
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::test_support::write_fixture;
    use tempfile::TempDir;

    #[test]
    fn test_format_report() {
        let config = WorkflowConfig {
            project_name: "night-sky".to_string(),
            content_pillars: vec!["A".to_string(), "B".to_string()],
            default_hashtags: Vec::new(),
        };
        let prompts = vec![
            Prompt::new("First", "Hook", "Follow").unwrap(),
            Prompt::new("Second", "Hook", "").unwrap(),
            Prompt::new("Third", "Hook", "Share").unwrap(),
        ];

        let report = format_report(&prompts, &config);

        assert_eq!(
            report,
            "Project: night-sky\nPillars: A, B\nPrompts: 3\n\n    1. First -> A\n    2. Second -> B [no CTA]\n    3. Third -> A\n"
        );
    }

    #[test]
    fn test_format_report_without_prompts() {
        let report = format_report(&[], &WorkflowConfig::default());
        assert_eq!(
            report,
            "Project: content-automation\nPillars: General\nPrompts: 0\n"
        );
    }

    #[test]
    fn test_check_reports_validation_error() {
        let temp_dir = TempDir::new().unwrap();
        let csv = write_fixture(temp_dir.path(), "prompts.csv", "title,hook\n,Hook\n");
        let config = write_fixture(temp_dir.path(), "workflow.yaml", "{}\n");

        let err = cmd_check(CheckArgs { csv, config }).unwrap_err();
        assert!(matches!(err, PipelineError::ValidationError(_)));
    }
}
