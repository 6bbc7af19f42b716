//! Recovery engine contract
//!
//! Defines the uniform contract every recovery engine satisfies:
//! - execute a recovery action against a batch of target files
//! - advertise supported action kinds
//! - validate an action before execution
//! - score confidence from accumulated errors and warnings

pub mod registry;
pub mod types;

// Re-export commonly used types
pub use registry::EngineRegistry;
pub use types::{RecoveryAction, RecoveryResult, TARGET_FILES_KEY};

use crate::errors::{RecoveryError, Result};
use async_trait::async_trait;

/// Base action check shared by all engines
///
/// Presence only; the contents of `target_files` are not validated here.
/// Engine overrides of `validate_action` call this first and may only add
/// constraints on top of it.
pub fn has_target_files(action: &RecoveryAction) -> bool {
    action.contains(TARGET_FILES_KEY)
}

/// Contract for recovery engines
///
/// Engines are stateless between calls: each `execute_recovery` invocation
/// owns its local accumulators and returns them embedded in the result, so
/// concurrent calls on the same instance need no locking.
#[async_trait]
pub trait RecoveryEngine: Send + Sync {
    /// Engine name, used in results and log output
    fn name(&self) -> &str;

    /// Execute a recovery action
    ///
    /// Per-file problems (missing file, unreadable content, detection
    /// failure) are recorded in the result's `errors` or `warnings`, never
    /// propagated; `success` is true iff `errors` is empty. `Err` is
    /// reserved for fatal conditions that prevent producing a result at all.
    async fn execute_recovery(&self, action: &RecoveryAction) -> Result<RecoveryResult>;

    /// Action kinds this engine supports
    fn recovery_actions(&self) -> Vec<String> {
        vec!["default_recovery".to_string()]
    }

    /// Pre-flight check before `execute_recovery`
    ///
    /// The base contract requires only that `target_files` is present.
    fn validate_action(&self, action: &RecoveryAction) -> bool {
        has_target_files(action)
    }

    /// Confidence score from accumulated errors and warnings
    ///
    /// Shared scoring policy: flat 0.8 baseline, minus 0.1 per error and
    /// 0.05 per warning, clamped to [0.0, 1.0]. Engines reuse this rather
    /// than reimplement scoring.
    fn calculate_confidence(&self, errors: &[String], warnings: &[String]) -> f64 {
        let mut confidence = 0.8;

        if !errors.is_empty() {
            confidence -= errors.len() as f64 * 0.1;
        }

        if !warnings.is_empty() {
            confidence -= warnings.len() as f64 * 0.05;
        }

        confidence.clamp(0.0, 1.0)
    }

    /// Validate and execute in one step
    ///
    /// Rejects the action with [`RecoveryError::InvalidAction`] when
    /// `validate_action` fails, so callers cannot execute an action that
    /// failed its pre-flight check.
    async fn run(&self, action: &RecoveryAction) -> Result<RecoveryResult> {
        if !self.validate_action(action) {
            return Err(RecoveryError::InvalidAction {
                engine: self.name().to_string(),
                reason: "action failed pre-flight validation".to_string(),
            });
        }
        self.execute_recovery(action).await
    }
}
