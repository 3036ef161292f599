//! Milestone identifiers and resolved milestones.
//!
//! A milestone identifier is a namespaced string of the form
//! `<source>:<category>/<name>`, e.g. `base:story/mine_stone`. The category
//! segment is what the milestone catalog classifies on. Identifiers are
//! immutable once discovered and are persisted as flat strings.
//!
//! The event channel is known to deliver spurious identifiers with the same
//! shape as real milestones (the host fires the same event for recipe
//! unlocks), so parsing must be total: a malformed identifier yields
//! `category() == None` rather than an error.

use serde::{Deserialize, Serialize};

/// A namespaced milestone identifier: `<source>:<category>/<name>`.
///
/// Ordering is lexicographic on the full identifier string, which gives the
/// ledger a stable snapshot order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MilestoneId(String);

impl MilestoneId {
    /// Create a milestone identifier from a raw string.
    ///
    /// No validation is performed here; classification of malformed
    /// identifiers is the catalog's job and always answers "not tracked".
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the full identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the namespace (the part before the first `:`), if present.
    pub fn namespace(&self) -> Option<&str> {
        self.0.split_once(':').map(|(namespace, _)| namespace)
    }

    /// Return the category: the first path segment after the namespace.
    ///
    /// Returns `None` when the identifier has no `/`-delimited category
    /// segment, which marks it as unclassifiable.
    pub fn category(&self) -> Option<&str> {
        let path = self
            .0
            .split_once(':')
            .map_or(self.0.as_str(), |(_, path)| path);
        path.split_once('/').map(|(category, _)| category)
    }
}

impl core::fmt::Display for MilestoneId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MilestoneId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for MilestoneId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// A milestone resolved against the host's live registry.
///
/// The ledger itself stores only identifiers; a `Milestone` is what the
/// registry hands back when an identifier still resolves to live content.
/// Stored identifiers that no longer resolve (renamed or removed content)
/// are dropped silently at load time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Milestone {
    /// The milestone's unique identifier.
    pub id: MilestoneId,
}

impl Milestone {
    /// Create a milestone from its identifier.
    pub const fn new(id: MilestoneId) -> Self {
        Self { id }
    }
}
