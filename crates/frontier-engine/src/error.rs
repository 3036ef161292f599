//! Error types for the `frontier-engine` crate.
//!
//! Steady-state handlers never return errors -- they degrade by skipping
//! the offending unit of work. [`EngineError`] appears only on the
//! explicit fallible surface: attachment, persistence, and operator
//! config edits.

use frontier_config::ConfigError;

use crate::ports::PortError;

/// Errors from engine attachment, persistence, and operator edits.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A configuration load, edit, or save failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A host port failed during a fallible engine operation.
    #[error(transparent)]
    Port(#[from] PortError),
}
