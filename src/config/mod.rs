//! Workflow configuration for the caption pipeline.
//!
//! This module defines the `WorkflowConfig` struct loaded from
//! `config/workflow.yaml`. Parsing is best effort: unknown keys are ignored and
//! missing sections fall back to documented defaults. Only a document that is
//! not a mapping, or a field of the wrong type, is rejected.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use model::WorkflowConfig;
