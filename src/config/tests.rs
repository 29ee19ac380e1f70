//! Tests for config functionality.

use crate::config::WorkflowConfig;
use crate::error::PipelineError;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = WorkflowConfig::default();

    assert_eq!(config.project_name, "content-automation");
    assert_eq!(config.content_pillars, vec!["General"]);
    assert!(config.default_hashtags.is_empty());
}

#[test]
fn test_parse_empty_mapping_uses_defaults() {
    let config = WorkflowConfig::from_yaml("{}").unwrap();
    assert_eq!(config, WorkflowConfig::default());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r##"
project:
  name: night-sky
  content_pillars:
    - Cosmic Myth Bites
    - Daily Rituals
publishing:
  default_hashtags:
    - "#Luna"
    - "#Astrology"
"##;
    let config = WorkflowConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.project_name, "night-sky");
    assert_eq!(
        config.content_pillars,
        vec!["Cosmic Myth Bites", "Daily Rituals"]
    );
    assert_eq!(config.default_hashtags, vec!["#Luna", "#Astrology"]);
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
project:
  content_pillars: [Tips]
"#;
    let config = WorkflowConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.project_name, "content-automation");
    assert_eq!(config.content_pillars, vec!["Tips"]);
    assert!(config.default_hashtags.is_empty());
}

#[test]
fn test_empty_pillar_list_falls_back_to_default() {
    let config = WorkflowConfig::from_yaml("project:\n  content_pillars: []\n").unwrap();
    assert_eq!(config.content_pillars, vec!["General"]);
}

#[test]
fn test_null_sections_fall_back_to_defaults() {
    let yaml = r#"
project:
publishing:
  default_hashtags:
"#;
    let config = WorkflowConfig::from_yaml(yaml).unwrap();
    assert_eq!(config, WorkflowConfig::default());
}

#[test]
fn test_numeric_project_name_is_stringified() {
    let config = WorkflowConfig::from_yaml("project:\n  name: 2024\n").unwrap();
    assert_eq!(config.project_name, "2024");

    let config = WorkflowConfig::from_yaml("project:\n  name: true\n").unwrap();
    assert_eq!(config.project_name, "true");
}

#[test]
fn test_null_project_name_uses_default() {
    let config = WorkflowConfig::from_yaml("project:\n  name:\n").unwrap();
    assert_eq!(config.project_name, "content-automation");
}

#[test]
fn test_non_scalar_project_name_is_format_error() {
    let err = WorkflowConfig::from_yaml("project:\n  name: [a, b]\n").unwrap_err();
    assert!(matches!(err, PipelineError::FormatError(_)));
}

#[test]
fn test_unquoted_hashtag_entry_is_dropped() {
    // `- #Luna` is a YAML comment, so the entry is null.
    let yaml = r##"
publishing:
  default_hashtags:
    - #Luna
    - "#Astrology"
"##;
    let config = WorkflowConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.default_hashtags, vec!["#Astrology"]);
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
project:
  name: demo
  owner: editorial
scheduling:
  cadence: daily
"#;
    let config = WorkflowConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.project_name, "demo");
}

#[test]
fn test_non_mapping_is_format_error() {
    for yaml in ["", "- a\n- b\n", "just a string"] {
        let err = WorkflowConfig::from_yaml(yaml).unwrap_err();
        assert!(
            matches!(err, PipelineError::FormatError(_)),
            "expected FormatError for {:?}, got {:?}",
            yaml,
            err
        );
    }
}

#[test]
fn test_invalid_yaml_is_format_error() {
    let err = WorkflowConfig::from_yaml("project: [unclosed").unwrap_err();
    assert!(matches!(err, PipelineError::FormatError(_)));
}

#[test]
fn test_wrong_field_type_is_format_error() {
    let err = WorkflowConfig::from_yaml("project:\n  content_pillars: {a: b}\n").unwrap_err();
    assert!(matches!(err, PipelineError::FormatError(_)));
}

#[test]
fn test_pillar_for_wraps_around() {
    let config = WorkflowConfig {
        content_pillars: vec!["A".to_string(), "B".to_string()],
        ..WorkflowConfig::default()
    };

    let assigned: Vec<&str> = (0..5).map(|i| config.pillar_for(i)).collect();
    assert_eq!(assigned, vec!["A", "B", "A", "B", "A"]);
}

#[test]
fn test_pillar_for_with_empty_list_uses_default() {
    let config = WorkflowConfig {
        content_pillars: Vec::new(),
        ..WorkflowConfig::default()
    };
    assert_eq!(config.pillar_for(7), "General");
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("workflow.yaml");
    std::fs::write(&path, "project:\n  name: from-disk\n").unwrap();

    let config = WorkflowConfig::load(&path).unwrap();
    assert_eq!(config.project_name, "from-disk");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = WorkflowConfig::load(temp_dir.path().join("missing.yaml")).unwrap_err();

    assert!(matches!(err, PipelineError::Io(_)));
    assert!(err.to_string().contains("failed to read config file"));
}
