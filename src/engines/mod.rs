//! Concrete recovery engine implementations

pub mod syntax;

// Re-export commonly used types
pub use syntax::{SyntaxEngineConfig, SyntaxRecoveryEngine};
