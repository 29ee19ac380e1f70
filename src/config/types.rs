//! Raw YAML shapes and default values for the workflow config.
//!
//! The raw structs mirror the file layout (`project`, `publishing`) and keep
//! every field optional so that partial configs deserialize cleanly. They are
//! folded into a `WorkflowConfig` once, at load time.

use serde::Deserialize;

/// Top-level layout of `workflow.yaml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawWorkflowConfig {
    pub project: Option<ProjectSection>,
    pub publishing: Option<PublishingSection>,
}

/// The `project:` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectSection {
    /// Display name of the project. Any scalar is accepted and stringified.
    pub name: Option<serde_yaml::Value>,

    /// Ordered content pillars, cycled across prompts.
    pub content_pillars: Option<Vec<String>>,
}

/// The `publishing:` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PublishingSection {
    /// Hashtags appended after the pillar hashtag on every caption.
    ///
    /// Entries may be null: an unquoted `- #Luna` is a YAML comment.
    pub default_hashtags: Option<Vec<Option<String>>>,
}

/// Pillar used when none are configured.
pub const DEFAULT_PILLAR: &str = "General";

// Default value functions
pub(crate) fn default_project_name() -> String {
    "content-automation".to_string()
}
pub(crate) fn default_content_pillars() -> Vec<String> {
    vec![DEFAULT_PILLAR.to_string()]
}
