//! Border radius derivation.
//!
//! A zone's resource limit is never stored; it is recomputed from the
//! ledger size on every change and re-applied. Re-applying the same value
//! is a no-op from the actuator's side, so recomputation is always safe.

/// Blocks of radius gained per discovered milestone.
pub const STEP: u64 = 5;

/// The fixed radius applied to zones whose policy entry is untracked.
pub const UNRESTRICTED_SENTINEL: u64 = 60_000_000;

/// Center bias passed to the actuator with every limit application.
pub const CENTER_BIAS: u32 = 1;

/// Derive a zone's radius from the ledger size and the configured offset.
///
/// `tracked` zones grow linearly with the ledger; untracked zones always
/// get [`UNRESTRICTED_SENTINEL`], regardless of ledger size.
pub fn limit_for(milestones: usize, offset: u32, tracked: bool) -> u64 {
    if !tracked {
        return UNRESTRICTED_SENTINEL;
    }

    u64::try_from(milestones)
        .unwrap_or(u64::MAX)
        .saturating_mul(STEP)
        .saturating_add(u64::from(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ledger_yields_the_offset() {
        assert_eq!(limit_for(0, 1, true), 1);
        assert_eq!(limit_for(0, 16, true), 16);
    }

    #[test]
    fn tracked_zones_grow_five_per_milestone() {
        assert_eq!(limit_for(1, 1, true), 6);
        assert_eq!(limit_for(2, 1, true), 11);
        assert_eq!(limit_for(3, 1, true), 16);
        assert_eq!(limit_for(100, 0, true), 500);
    }

    #[test]
    fn untracked_zones_always_get_the_sentinel() {
        assert_eq!(limit_for(0, 1, false), UNRESTRICTED_SENTINEL);
        assert_eq!(limit_for(10_000, 99, false), UNRESTRICTED_SENTINEL);
    }

    #[test]
    fn derivation_saturates_instead_of_overflowing() {
        assert_eq!(limit_for(usize::MAX, u32::MAX, true), u64::MAX);
    }
}
