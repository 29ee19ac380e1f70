//! WorkflowConfig struct definition and default implementation.

use super::types::{default_content_pillars, default_project_name};

/// Settings used by the caption generator.
///
/// Loaded once per run and never mutated afterwards. `load` and `from_yaml`
/// always produce a non-empty `content_pillars`; a hand-built config with an
/// empty list still works because `pillar_for` then falls back to "General".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowConfig {
    /// Project name (`project.name`, default: "content-automation").
    pub project_name: String,

    /// Ordered pillars (`project.content_pillars`, default: `["General"]`).
    pub content_pillars: Vec<String>,

    /// Hashtags added to every caption (`publishing.default_hashtags`).
    pub default_hashtags: Vec<String>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            content_pillars: default_content_pillars(),
            default_hashtags: Vec::new(),
        }
    }
}
