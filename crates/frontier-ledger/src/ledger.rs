//! The [`Ledger`] struct: a deduplicated, insert-only milestone set.
//!
//! # Design
//!
//! - **Insert-only**: there is deliberately no removal operation. The
//!   monotonicity invariant is enforced by the API surface, not by
//!   discipline at call sites.
//! - **Order-irrelevant**: membership is the only observable property;
//!   insertion order carries no meaning.
//! - **Stable snapshots**: the backing [`BTreeSet`] keeps identifiers in
//!   lexicographic order, so [`snapshot_identifiers`] is reproducible
//!   within and across calls for the same membership.
//!
//! [`snapshot_identifiers`]: Ledger::snapshot_identifiers

use std::collections::BTreeSet;

use frontier_types::MilestoneId;

/// The shared, deduplicated set of discovered milestones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    /// All discovered milestone identifiers, lexicographically ordered.
    entries: BTreeSet<MilestoneId>,
}

impl Ledger {
    /// Create a new empty ledger.
    pub const fn new() -> Self {
        Self {
            entries: BTreeSet::new(),
        }
    }

    /// Return whether the given milestone has been discovered.
    pub fn contains(&self, id: &MilestoneId) -> bool {
        self.entries.contains(id)
    }

    /// Insert a milestone, returning whether it was newly inserted.
    ///
    /// Idempotent: re-inserting an already-present identifier returns
    /// `false` and leaves the ledger unchanged.
    pub fn insert(&mut self, id: MilestoneId) -> bool {
        self.entries.insert(id)
    }

    /// Return the number of discovered milestones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return whether no milestones have been discovered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all discovered milestones in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &MilestoneId> {
        self.entries.iter()
    }

    /// Return all identifiers as plain strings for persistence.
    ///
    /// The order is lexicographic and therefore stable for a given
    /// membership; persistence itself attaches no meaning to it.
    pub fn snapshot_identifiers(&self) -> Vec<String> {
        self.entries.iter().map(|id| id.as_str().to_owned()).collect()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a MilestoneId;
    type IntoIter = std::collections::btree_set::Iter<'a, MilestoneId>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<MilestoneId> for Ledger {
    fn from_iter<I: IntoIterator<Item = MilestoneId>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
