//! Remedy - Pluggable Recovery Engines
//!
//! A minimal plugin framework for recovery engines: components that inspect
//! a set of target files for a class of defect and report a structured
//! outcome.
//!
//! # Architecture
//!
//! - **Engine contract**: the [`RecoveryEngine`] trait, the
//!   [`RecoveryResult`] data contract, shared confidence scoring and action
//!   validation
//! - **Registry**: name-based engine discovery
//! - **Engines**: concrete implementations (syntax checking)

pub mod errors;
pub mod engine;
pub mod engines;

// Re-export commonly used types
pub use engine::{EngineRegistry, RecoveryAction, RecoveryEngine, RecoveryResult};
pub use errors::{RecoveryError, Result};
