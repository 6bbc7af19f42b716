//! Recovery action and result types
//!
//! Core value types exchanged between a host and its recovery engines.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key every action must carry to pass base validation
pub const TARGET_FILES_KEY: &str = "target_files";

/// Caller-supplied recovery action
///
/// An open JSON object. The base contract recognizes a single key,
/// `target_files` (array of file-path strings); engines may read additional
/// keys but must not require them for base validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecoveryAction {
    fields: Map<String, Value>,
}

impl RecoveryAction {
    /// Create an empty action
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target files for this action
    pub fn with_target_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let files: Vec<Value> = files
            .into_iter()
            .map(|f| Value::String(f.into()))
            .collect();
        self.fields
            .insert(TARGET_FILES_KEY.to_string(), Value::Array(files));
        self
    }

    /// Set an arbitrary field (engine-specific keys, e.g. an action kind)
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Get a raw field value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Target file paths listed on this action
    ///
    /// Non-string entries are skipped; a missing or non-array `target_files`
    /// yields an empty list.
    pub fn target_files(&self) -> Vec<String> {
        match self.fields.get(TARGET_FILES_KEY) {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Result of one recovery attempt
///
/// Constructed once per `execute_recovery` call and owned by the caller
/// afterwards. `success` means the attempt completed without fatal per-file
/// errors, not that any defect was actually fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryResult {
    /// Whether the attempt completed without errors
    pub success: bool,

    /// Human-readable summary
    #[serde(default = "default_message")]
    pub message: String,

    /// Confidence score, always within [0.0, 1.0]
    #[serde(default = "default_confidence", deserialize_with = "clamped")]
    pub confidence: f64,

    /// Descriptions of edits performed, empty if none
    #[serde(default)]
    pub changes_made: Vec<String>,

    /// Name of the engine that produced this result
    #[serde(default = "default_engine_name")]
    pub engine_name: String,

    /// File paths the engine claims to have modified
    #[serde(default)]
    pub files_fixed: Vec<String>,

    /// Fatal-condition descriptions encountered while processing
    #[serde(default)]
    pub errors: Vec<String>,

    /// Non-fatal condition descriptions
    #[serde(default)]
    pub warnings: Vec<String>,

    /// Engine-specific extension data
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

fn default_message() -> String {
    "Recovery completed".to_string()
}

fn default_confidence() -> f64 {
    0.8
}

fn default_engine_name() -> String {
    "unknown".to_string()
}

fn clamped<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.clamp(0.0, 1.0))
}

impl RecoveryResult {
    /// Create a result with default fields
    pub fn new(success: bool) -> Self {
        Self {
            success,
            message: default_message(),
            confidence: default_confidence(),
            changes_made: Vec::new(),
            engine_name: default_engine_name(),
            files_fixed: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
            metadata: Map::new(),
        }
    }

    /// Set the summary message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the confidence score, clamping to [0.0, 1.0]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Set the producing engine's name
    pub fn with_engine_name(mut self, name: impl Into<String>) -> Self {
        self.engine_name = name.into();
        self
    }

    /// Set the descriptions of edits performed
    pub fn with_changes_made(mut self, changes: Vec<String>) -> Self {
        self.changes_made = changes;
        self
    }

    /// Set the files the engine claims to have modified
    pub fn with_files_fixed(mut self, files: Vec<String>) -> Self {
        self.files_fixed = files;
        self
    }

    /// Set the fatal-condition descriptions
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    /// Set the non-fatal condition descriptions
    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Add one metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_target_files() {
        let action = RecoveryAction::new().with_target_files(["a.py", "b.py"]);

        assert!(action.contains(TARGET_FILES_KEY));
        assert_eq!(action.target_files(), vec!["a.py", "b.py"]);
    }

    #[test]
    fn test_action_without_target_files() {
        let action = RecoveryAction::new().with_field("action_type", json!("fix_syntax_error"));

        assert!(!action.contains(TARGET_FILES_KEY));
        assert!(action.target_files().is_empty());
    }

    #[test]
    fn test_action_skips_non_string_entries() {
        let action =
            RecoveryAction::new().with_field(TARGET_FILES_KEY, json!(["a.py", 42, "b.py"]));

        assert_eq!(action.target_files(), vec!["a.py", "b.py"]);
    }

    #[test]
    fn test_action_extra_fields() {
        let action = RecoveryAction::new()
            .with_target_files(["a.py"])
            .with_field("action_type", json!("validate_syntax"));

        assert_eq!(
            action.get("action_type").and_then(|v| v.as_str()),
            Some("validate_syntax")
        );
    }

    #[test]
    fn test_result_defaults() {
        let result = RecoveryResult::new(true);

        assert!(result.success);
        assert_eq!(result.message, "Recovery completed");
        assert_eq!(result.engine_name, "unknown");
        assert_eq!(result.confidence, 0.8);
        assert!(result.changes_made.is_empty());
        assert!(result.metadata.is_empty());
    }

    #[test]
    fn test_confidence_clamped_high() {
        let result = RecoveryResult::new(true).with_confidence(1.5);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_confidence_clamped_low() {
        let result = RecoveryResult::new(true).with_confidence(-0.3);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_confidence_clamped_on_deserialize() {
        let result: RecoveryResult =
            serde_json::from_value(json!({"success": true, "confidence": 2.5})).unwrap();
        assert_eq!(result.confidence, 1.0);

        let result: RecoveryResult =
            serde_json::from_value(json!({"success": false, "confidence": -1.0})).unwrap();
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_result_builder() {
        let result = RecoveryResult::new(false)
            .with_message("Syntax recovery completed")
            .with_engine_name("syntax_recovery")
            .with_errors(vec!["boom".to_string()])
            .with_metadata("engine", json!("syntax_recovery"));

        assert!(!result.success);
        assert_eq!(result.engine_name, "syntax_recovery");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(
            result.metadata.get("engine").and_then(|v| v.as_str()),
            Some("syntax_recovery")
        );
    }

    #[test]
    fn test_result_serde_round_trip() {
        let result = RecoveryResult::new(true)
            .with_warnings(vec!["w".to_string()])
            .with_confidence(0.75);

        let json = serde_json::to_string(&result).unwrap();
        let back: RecoveryResult = serde_json::from_str(&json).unwrap();

        assert!(back.success);
        assert_eq!(back.warnings, vec!["w"]);
        assert_eq!(back.confidence, 0.75);
    }
}
