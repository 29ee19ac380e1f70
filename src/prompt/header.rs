//! Header normalization and column lookup for prompt CSVs.

use super::{CALL_TO_ACTION, CTA, HOOK, TITLE};
use crate::error::{PipelineError, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Normalize a header cell for matching: drop a UTF-8 BOM, trim, lower-case.
pub(crate) fn normalize_header(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Positions of the recognised columns within a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnIndex {
    pub title: usize,
    pub hook: usize,
    pub call_to_action: Option<usize>,
    pub cta: Option<usize>,
}

impl ColumnIndex {
    /// Resolve column positions from the header row.
    ///
    /// When two headers normalize to the same name, the right-most one wins.
    pub(crate) fn from_headers(headers: &StringRecord) -> Result<Self> {
        if headers.iter().all(|h| normalize_header(h).is_empty()) {
            return Err(PipelineError::FormatError(
                "prompt CSV must include a header row".to_string(),
            ));
        }

        let mut positions: HashMap<String, usize> = HashMap::new();
        for (i, name) in headers.iter().enumerate() {
            let name = normalize_header(name);
            if !name.is_empty() {
                positions.insert(name, i);
            }
        }

        let title = positions.get(TITLE).copied();
        let hook = positions.get(HOOK).copied();
        match (title, hook) {
            (Some(title), Some(hook)) => Ok(Self {
                title,
                hook,
                call_to_action: positions.get(CALL_TO_ACTION).copied(),
                cta: positions.get(CTA).copied(),
            }),
            _ => {
                let missing: Vec<&str> = [(TITLE, title), (HOOK, hook)]
                    .into_iter()
                    .filter(|(_, pos)| pos.is_none())
                    .map(|(name, _)| name)
                    .collect();
                Err(PipelineError::FormatError(format!(
                    "prompt CSV must contain 'title' and 'hook' columns (missing: {})",
                    missing.join(", ")
                )))
            }
        }
    }

    /// Project a record onto the field mapping understood by
    /// `Prompt::from_mapping`. Alias keys are only present when their column is.
    pub(crate) fn mapping(&self, record: &StringRecord) -> HashMap<String, String> {
        let cell = |i: usize| record.get(i).unwrap_or("").to_string();

        let mut mapping = HashMap::new();
        mapping.insert(TITLE.to_string(), cell(self.title));
        mapping.insert(HOOK.to_string(), cell(self.hook));
        if let Some(i) = self.call_to_action {
            mapping.insert(CALL_TO_ACTION.to_string(), cell(i));
        }
        if let Some(i) = self.cta {
            mapping.insert(CTA.to_string(), cell(i));
        }
        mapping
    }
}
