//! The [`BorderConfig`] record: persistent state for one border install.
//!
//! Every field carries a serde default so files written by older versions
//! (or edited down by hand) load cleanly. The `milestones` list has no
//! ordering semantics; it is a flat snapshot of the ledger.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use frontier_types::ZoneEntry;

use crate::value::ConfigValue;
use crate::ConfigError;

/// Default starting offset: one block of border beyond zero milestones.
const fn default_starting_offset() -> u32 {
    1
}

/// Persistent state for one milestone-tracking install.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderConfig {
    /// Whether first-join world setup has already run.
    #[serde(default)]
    pub setup_complete: bool,

    /// The constant added to the derived limit of every tracked zone.
    #[serde(default = "default_starting_offset")]
    pub starting_offset: u32,

    /// Flat snapshot of discovered milestone identifiers. Order carries no
    /// meaning; unresolvable entries are dropped at load time.
    #[serde(default)]
    pub milestones: Vec<String>,

    /// Zone policy: zone name to whether its limit tracks the ledger.
    #[serde(default)]
    pub zones: BTreeMap<String, bool>,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            setup_complete: false,
            starting_offset: default_starting_offset(),
            milestones: Vec::new(),
            zones: BTreeMap::new(),
        }
    }
}

impl BorderConfig {
    /// Parse a configuration from a YAML string.
    ///
    /// Missing keys take their defaults; unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Serialize the configuration to a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yml::to_string(self)?)
    }

    /// Return the zone policy as a list of [`ZoneEntry`] values.
    pub fn zone_entries(&self) -> Vec<ZoneEntry> {
        self.zones
            .iter()
            .map(|(name, tracked)| ZoneEntry::new(name.clone(), *tracked))
            .collect()
    }

    /// Set whether a zone's limit tracks the ledger, inserting the zone
    /// into the policy if it was not listed.
    pub fn set_zone_tracked(&mut self, zone: impl Into<String>, tracked: bool) {
        let _ = self.zones.insert(zone.into(), tracked);
    }

    /// Apply an operator edit to a named scalar field.
    ///
    /// Each editable field validates the value's type and range explicitly.
    /// The `milestones` list and the `zones` map are not editable through
    /// this path: the ledger owns the former, and the latter goes through
    /// [`set_zone_tracked`](Self::set_zone_tracked).
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnknownField`] for a field name that does not exist
    ///   or is not operator-editable.
    /// - [`ConfigError::WrongType`] when the value's shape does not match.
    /// - [`ConfigError::InvalidValue`] when the value is out of range
    ///   (negative `starting_offset`, for one).
    pub fn apply_field(&mut self, field: &str, value: &ConfigValue) -> Result<(), ConfigError> {
        match field {
            "setup_complete" => match value {
                ConfigValue::Bool(b) => {
                    self.setup_complete = *b;
                    Ok(())
                }
                other => Err(ConfigError::WrongType {
                    field: field.to_owned(),
                    expected: "bool",
                    actual: other.type_name(),
                }),
            },
            "starting_offset" => match value {
                ConfigValue::Int(i) => {
                    let offset =
                        u32::try_from(*i).map_err(|_| ConfigError::InvalidValue {
                            field: field.to_owned(),
                            reason: format!("offset must be a non-negative integer, got {i}"),
                        })?;
                    self.starting_offset = offset;
                    Ok(())
                }
                other => Err(ConfigError::WrongType {
                    field: field.to_owned(),
                    expected: "int",
                    actual: other.type_name(),
                }),
            },
            _ => Err(ConfigError::UnknownField {
                field: field.to_owned(),
            }),
        }
    }
}
