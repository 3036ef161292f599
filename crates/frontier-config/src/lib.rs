//! Typed YAML configuration store for the Frontier border engine.
//!
//! The engine's persistent state lives in small named YAML documents inside
//! a data directory. Each document is a [`BorderConfig`]: a typed record
//! with explicitly enumerated fields and per-field serde defaults, so a
//! partially-written file loads cleanly and round-trips without reordering
//! semantics.
//!
//! Operator tooling edits configs through the narrow [`ConfigValue`] union
//! (int | float | bool | string) with explicit per-field validation --
//! there is no reflective key/value bag.
//!
//! # Modules
//!
//! - [`schema`] -- The [`BorderConfig`] record and its defaults.
//! - [`store`] -- The [`ConfigStore`]: named configs loaded from a directory.
//! - [`value`] -- The [`ConfigValue`] union and field-edit validation.

pub mod schema;
pub mod store;
pub mod value;

pub use schema::BorderConfig;
pub use store::ConfigStore;
pub use value::ConfigValue;

/// Errors that can occur in configuration loading, editing, and saving.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write a configuration file on disk.
    #[error("config I/O failure: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse or serialize YAML content.
    #[error("config YAML failure: {source}")]
    Yaml {
        /// The underlying YAML error.
        #[from]
        source: serde_yml::Error,
    },

    /// A configuration was requested by a name the store does not know.
    ///
    /// Reported to the caller; never fatal to the engine.
    #[error("no configuration named {name:?}")]
    NotFound {
        /// The requested configuration name.
        name: String,
    },

    /// An operator edit named a field that does not exist on the record.
    #[error("unknown config field {field:?}")]
    UnknownField {
        /// The requested field name.
        field: String,
    },

    /// An operator edit supplied a value of the wrong type for the field.
    #[error("field {field:?} expects {expected}, got {actual}")]
    WrongType {
        /// The field being edited.
        field: String,
        /// The type the field expects.
        expected: &'static str,
        /// The type of the supplied value.
        actual: &'static str,
    },

    /// An operator edit supplied a value outside the field's valid range.
    #[error("invalid value for field {field:?}: {reason}")]
    InvalidValue {
        /// The field being edited.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },
}
