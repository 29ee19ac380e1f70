//! Caption rendering.
//!
//! A caption is the hook line, an optional call-to-action line, and a
//! `Hashtags:` line. The first hashtag is derived from the prompt's content
//! pillar; the configured default hashtags follow in order.
//!
//! ```text
//! Unveil lunar secrets
//!
//! Follow for nightly rituals
//!
//! Hashtags: #CosmicMythBites #Luna
//! ```
//!
//! Rendering is pure: the same prompt, pillar and config always produce the
//! same bytes, so runs can be diffed during editorial review.

use crate::config::WorkflowConfig;
use crate::prompt::Prompt;
use regex::Regex;
use std::sync::LazyLock;

/// Hashtag used when a pillar name contains no letters or digits.
pub const FALLBACK_PILLAR_HASHTAG: &str = "#Content";

/// Word tokens inside a pillar name.
static PILLAR_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9]+").expect("Invalid pillar word regex"));

/// Derive a hashtag from a pillar name.
///
/// `"cosmic myth bites"` becomes `#CosmicMythBites` and `"Daily-Tips!!"`
/// becomes `#DailyTips`. Pillars without any word tokens map to `#Content`.
pub fn pillar_hashtag(pillar: &str) -> String {
    let words: String = PILLAR_WORD_REGEX
        .find_iter(pillar)
        .map(|m| capitalize(m.as_str()))
        .collect();

    if words.is_empty() {
        FALLBACK_PILLAR_HASHTAG.to_string()
    } else {
        format!("#{}", words)
    }
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Hashtags for a caption: the pillar hashtag, then the config defaults.
/// Blank entries are dropped.
pub fn hashtags(pillar: &str, config: &WorkflowConfig) -> Vec<String> {
    std::iter::once(pillar_hashtag(pillar))
        .chain(config.default_hashtags.iter().cloned())
        .filter(|tag| !tag.trim().is_empty())
        .collect()
}

/// Render the caption body for one prompt.
///
/// The result has no trailing newline.
pub fn render_caption(prompt: &Prompt, pillar: &str, config: &WorkflowConfig) -> String {
    let mut lines: Vec<String> = vec![prompt.hook.clone()];

    if prompt.has_call_to_action() {
        lines.push(String::new());
        lines.push(prompt.call_to_action.clone());
    }

    lines.push(String::new());
    lines.push(format!("Hashtags: {}", hashtags(pillar, config).join(" ")));

    lines.join("\n")
}
