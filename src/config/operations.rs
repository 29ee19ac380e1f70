//! Config loading and pillar lookup.

use super::model::WorkflowConfig;
use super::types::{
    DEFAULT_PILLAR, RawWorkflowConfig, default_content_pillars, default_project_name,
};
use crate::error::{PipelineError, Result};
use std::path::Path;
use tracing::debug;

impl WorkflowConfig {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(WorkflowConfig)` - Parsed config with defaults applied
    /// * `Err(PipelineError::Io)` - The file could not be read
    /// * `Err(PipelineError::FormatError)` - The document is not a mapping or
    ///   a field has the wrong type
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_yaml(&content)?;
        debug!(
            path = %path.display(),
            project = %config.project_name,
            pillars = config.content_pillars.len(),
            "loaded workflow config"
        );
        Ok(config)
    }

    /// Parse config from a YAML string.
    ///
    /// The top level must be a mapping. An empty document is not a mapping.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(|e| {
            PipelineError::FormatError(format!("failed to parse config YAML: {}", e))
        })?;

        if !value.is_mapping() {
            return Err(PipelineError::FormatError(
                "workflow configuration must be a mapping".to_string(),
            ));
        }

        let raw: RawWorkflowConfig = serde_yaml::from_value(value).map_err(|e| {
            PipelineError::FormatError(format!("invalid workflow configuration: {}", e))
        })?;

        Self::from_raw(raw)
    }

    /// Fold the raw sections into a config, filling in defaults.
    fn from_raw(raw: RawWorkflowConfig) -> Result<Self> {
        let project = raw.project.unwrap_or_default();
        let publishing = raw.publishing.unwrap_or_default();

        let content_pillars = match project.content_pillars {
            Some(pillars) if !pillars.is_empty() => pillars,
            _ => default_content_pillars(),
        };

        let project_name = match project.name {
            Some(name) => scalar_to_string(name)?.unwrap_or_else(default_project_name),
            None => default_project_name(),
        };

        let default_hashtags = publishing
            .default_hashtags
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect();

        Ok(Self {
            project_name,
            content_pillars,
            default_hashtags,
        })
    }

    /// Pillar assigned to the prompt at `index`, wrapping around the list.
    pub fn pillar_for(&self, index: usize) -> &str {
        if self.content_pillars.is_empty() {
            return DEFAULT_PILLAR;
        }
        &self.content_pillars[index % self.content_pillars.len()]
    }
}

/// String form of a scalar YAML value. Null maps to `None`.
fn scalar_to_string(value: serde_yaml::Value) -> Result<Option<String>> {
    use serde_yaml::Value;

    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(PipelineError::FormatError(format!(
            "invalid workflow configuration: project.name must be a scalar, found {:?}",
            other
        ))),
    }
}
