//! Transform configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TreeformError;
use crate::transform::{DEFAULT_PARALLEL_THRESHOLD, TransformOptions, TraversalMode};
use crate::view_strategy::{UnknownNodePolicy, ViewStrategy};

/// Config file names, in lookup order.
pub const CONFIG_FILES: &[&str] = &[".treeform.jsonc", ".treeform.json"];

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Result<Validator, String>> = OnceLock::new();

/// Settings for rendering documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformConfig {
    /// Traversal mode.
    #[serde(default)]
    pub mode: TraversalMode,

    /// Deepest allowed node (root is 1).
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Fan-out threshold for `parallel` mode.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,

    /// Handling of unknown node types.
    #[serde(default)]
    pub unknown_nodes: UnknownNodePolicy,
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            mode: TraversalMode::default(),
            max_depth: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            unknown_nodes: UnknownNodePolicy::default(),
        }
    }
}

impl TransformConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    ///
    /// Supports `.treeform.jsonc` and `.treeform.json`; both may contain
    /// comments.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TreeformError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TreeformError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config = Self::from_json(&content)?;
        debug!("config: loaded {}", path.display());

        Ok(config)
    }

    /// Parses configuration from JSON(C) text with schema validation.
    pub fn from_json(json: &str) -> Result<Self, TreeformError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| TreeformError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or_else(|| serde_json::Value::Object(Default::default()));

        let schema = CONFIG_SCHEMA
            .get_or_init(compile_schema)
            .as_ref()
            .map_err(|e| TreeformError::config(e.clone()))?;

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(TreeformError::config(format!(
                "Config validation failed: {}",
                error_msg
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| TreeformError::config(format!("Invalid config: {}", e)))
    }

    /// Finds the first config file from [`CONFIG_FILES`] in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Transformer options described by this config.
    pub fn options(&self) -> TransformOptions {
        TransformOptions {
            mode: self.mode,
            max_depth: self.max_depth,
            parallel_threshold: self.parallel_threshold,
        }
    }

    /// View strategy described by this config.
    pub fn strategy(&self) -> ViewStrategy {
        ViewStrategy::new().with_unknown_nodes(self.unknown_nodes)
    }
}

fn compile_schema() -> Result<Validator, String> {
    let schema_json: serde_json::Value = serde_json::from_str(SCHEMA_JSON)
        .map_err(|e| format!("Invalid embedded config schema: {}", e))?;
    Validator::new(&schema_json).map_err(|e| format!("Invalid config schema compilation: {}", e))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_config_default() {
        let config = TransformConfig::default();

        assert_eq!(config.mode, TraversalMode::Recursive);
        assert_eq!(config.max_depth, None);
        assert_eq!(config.parallel_threshold, 8);
        assert_eq!(config.unknown_nodes, UnknownNodePolicy::Error);
        assert_eq!(config.options(), TransformOptions::default());
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            // render wide documents concurrently
            "mode": "parallel",
            "maxDepth": 64,
            "parallelThreshold": 4,
            "unknownNodes": "placeholder",
        }"#;

        let config = TransformConfig::from_json(json).unwrap();

        assert_eq!(
            config.options(),
            TransformOptions::new()
                .mode(TraversalMode::Parallel)
                .max_depth(64)
                .parallel_threshold(4)
        );
        assert_eq!(
            config.strategy().unknown_nodes(),
            UnknownNodePolicy::Placeholder
        );
    }

    #[test]
    fn test_config_stack_mode() {
        let config = TransformConfig::from_json(r#"{ "mode": "stack" }"#).unwrap();
        assert_eq!(config.mode, TraversalMode::WorkStack);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = TransformConfig::from_json("// nothing here\n").unwrap();
        assert_eq!(config, TransformConfig::default());
    }

    #[rstest]
    #[case::unknown_property(r#"{ "modes": "stack" }"#, "Config validation failed")]
    #[case::invalid_mode(r#"{ "mode": "bfs" }"#, "Config validation failed")]
    #[case::zero_depth(r#"{ "maxDepth": 0 }"#, "Config validation failed")]
    #[case::type_mismatch(r#"{ "parallelThreshold": "many" }"#, "Config validation failed")]
    #[case::invalid_policy(r#"{ "unknownNodes": "ignore" }"#, "Config validation failed")]
    #[case::syntax_error(r#"{ "mode": "#, "Invalid JSON")]
    fn test_config_validation_errors(#[case] json: &str, #[case] expected_error_part: &str) {
        let result = TransformConfig::from_json(json);
        assert!(result.is_err(), "Expected error for JSON: {}", json);
        let err = result.unwrap_err();
        assert!(
            err.to_string().contains(expected_error_part),
            "Error message '{}' should contain '{}'",
            err,
            expected_error_part
        );
    }

    #[test]
    fn test_serialized_keys_match_schema() {
        let value = serde_json::to_value(TransformConfig::default()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "mode": "recursive",
                "maxDepth": null,
                "parallelThreshold": 8,
                "unknownNodes": "error"
            })
        );
        assert!(TransformConfig::from_json(&value.to_string()).is_ok());
    }

    #[test]
    fn test_discover_prefers_jsonc() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".treeform.json"), "{}").unwrap();
        fs::write(dir.path().join(".treeform.jsonc"), "{}").unwrap();

        let found = TransformConfig::discover(dir.path()).unwrap();

        assert_eq!(found, dir.path().join(".treeform.jsonc"));
    }

    #[test]
    fn test_discover_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(TransformConfig::discover(dir.path()), None);
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".treeform.json");
        fs::write(&path, r#"{ "maxDepth": 3 }"#).unwrap();

        let config = TransformConfig::from_file(&path).unwrap();

        assert_eq!(config.max_depth, Some(3));
        assert_eq!(config.mode, TraversalMode::Recursive);
    }

    #[test]
    fn test_from_file_missing() {
        let dir = TempDir::new().unwrap();
        let err = TransformConfig::from_file(dir.path().join("absent.json")).unwrap_err();

        assert!(err.to_string().starts_with("Configuration error: Failed to read"));
    }
}
