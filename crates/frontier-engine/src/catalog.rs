//! The milestone catalog: a static classifier over identifier categories.
//!
//! The host's event channel delivers every unlock through the same event,
//! real milestones and spurious ones (recipe unlocks) alike, with no
//! type-level distinction. The only reliable signal is the identifier's
//! category segment, so classification is a pure function of the string
//! and nothing else. A malformed identifier classifies as "not tracked" --
//! it must never be an error, or a spurious event could crash the engine.

use frontier_types::MilestoneId;

/// The categories whose milestones count toward the ledger.
///
/// Hardcoded on purpose: the host exposes no way to enumerate milestone
/// categories, and custom content is delivered with its own namespaces and
/// category names that this install does not track.
pub const TRACKED_CATEGORIES: [&str; 5] = ["story", "nether", "adventure", "end", "husbandry"];

/// Return whether an identifier counts toward the shared ledger.
///
/// Pure: the same input always yields the same output. Identifiers with no
/// recognizable category segment return `false`.
pub fn is_tracked(id: &MilestoneId) -> bool {
    id.category()
        .is_some_and(|category| TRACKED_CATEGORIES.contains(&category))
}
