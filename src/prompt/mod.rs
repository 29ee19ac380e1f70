//! Prompt records and the CSV prompt loader.
//!
//! A prompt is one content idea exported from the ideation sheet: a title, an
//! opening hook line, and an optional call-to-action. The loader reads the
//! sheet's CSV export and yields validated prompts in row order:
//!
//! ```text
//! Title,Hook,CTA
//! Moon Magic,Unveil lunar secrets,Follow for nightly rituals
//! # parked,Not ready yet,
//! ```
//!
//! Header names are matched case-insensitively. Rows whose cells are all blank
//! and rows whose first non-blank cell starts with `#` are skipped.

mod header;
mod loader;

pub use loader::{PromptReader, load_prompts};

use crate::error::{PipelineError, Result};
use std::collections::HashMap;

/// Mapping key for the prompt title.
pub const TITLE: &str = "title";
/// Mapping key for the hook line.
pub const HOOK: &str = "hook";
/// Preferred mapping key for the call-to-action.
pub const CALL_TO_ACTION: &str = "call_to_action";
/// Short alias for the call-to-action.
pub const CTA: &str = "cta";

/// A validated creative prompt.
///
/// All fields are trimmed. `title` and `hook` are never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub hook: String,
    /// Empty when the prompt has no call-to-action.
    pub call_to_action: String,
}

impl Prompt {
    /// Build a prompt, trimming every field.
    ///
    /// Fails with `ValidationError` when `title` or `hook` is blank.
    pub fn new(
        title: impl AsRef<str>,
        hook: impl AsRef<str>,
        call_to_action: impl AsRef<str>,
    ) -> Result<Self> {
        let title = title.as_ref().trim();
        let hook = hook.as_ref().trim();

        let missing: Vec<&str> = [(TITLE, title), (HOOK, hook)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect();
        if !missing.is_empty() {
            return Err(PipelineError::ValidationError(format!(
                "prompt is missing required field(s): {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            title: title.to_string(),
            hook: hook.to_string(),
            call_to_action: call_to_action.as_ref().trim().to_string(),
        })
    }

    /// Build a prompt from a field mapping keyed by lower-case column names.
    ///
    /// The call-to-action comes from `call_to_action` when it is non-empty,
    /// otherwise from `cta`, otherwise it is empty. A whitespace-only
    /// `call_to_action` still wins and trims to empty.
    pub fn from_mapping(mapping: &HashMap<String, String>) -> Result<Self> {
        let field = |key: &str| mapping.get(key).map(String::as_str).unwrap_or("");

        let call_to_action = [CALL_TO_ACTION, CTA]
            .into_iter()
            .map(field)
            .find(|value| !value.is_empty())
            .unwrap_or("");

        Self::new(field(TITLE), field(HOOK), call_to_action)
    }

    /// Whether this prompt carries a call-to-action line.
    pub fn has_call_to_action(&self) -> bool {
        !self.call_to_action.is_empty()
    }
}
