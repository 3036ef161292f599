//! Capability traits the host implements for the engine.
//!
//! The engine orchestrates everything through these four narrow ports.
//! They are deliberately minimal: the engine composes capabilities rather
//! than inheriting from a host framework type, and each port failure is a
//! recoverable condition the engine logs and skips.

use std::collections::BTreeSet;

use frontier_types::{Milestone, MilestoneId, ParticipantId, Position};

/// Errors surfaced by host-implemented ports.
///
/// Every variant is recoverable from the engine's point of view: the
/// offending unit of work is skipped, never propagated upward.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// The participant disconnected between enumeration and use.
    #[error("participant {0} is no longer connected")]
    StaleParticipant(ParticipantId),

    /// The zone policy named a zone the actuator cannot resolve.
    #[error("no live zone named {0:?}")]
    UnknownZone(String),

    /// Any other host-side failure.
    #[error("host failure: {0}")]
    Host(String),
}

/// Queries and mutates a participant's per-milestone completion state.
///
/// `mark_complete` must be idempotent: marking an already-complete
/// milestone is a no-op on the host side.
pub trait ProgressAdapter {
    /// Enumerate the currently-connected participants.
    ///
    /// The set may change between any two calls; callers must tolerate
    /// handles going stale mid-iteration.
    fn connected(&self) -> Vec<ParticipantId>;

    /// List the milestones the participant has completed.
    fn list_completed(
        &self,
        participant: ParticipantId,
    ) -> Result<BTreeSet<MilestoneId>, PortError>;

    /// Mark a milestone complete for the participant (idempotent).
    fn mark_complete(
        &mut self,
        participant: ParticipantId,
        milestone: &MilestoneId,
    ) -> Result<(), PortError>;
}

/// Resolves identifiers against the host's full milestone registry.
///
/// Stored identifiers that no longer resolve (renamed or removed content)
/// are dropped silently at load time.
pub trait MilestoneRegistry {
    /// Resolve an identifier to a live milestone, if one exists.
    fn resolve(&self, id: &MilestoneId) -> Option<Milestone>;
}

/// Applies a derived radius to a named zone.
pub trait ZoneActuator {
    /// Set a zone's border to the given radius.
    ///
    /// Re-applying the current value is a no-op. An unknown zone name is a
    /// recoverable error; the engine warns and continues with other zones.
    fn set_zone_limit(
        &mut self,
        zone: &str,
        radius: u64,
        center_bias: u32,
    ) -> Result<(), PortError>;
}

/// World mutations used only by first-join setup.
pub trait WorldSetupActuator {
    /// The participant's current spawn position.
    fn spawn_position(&self, participant: ParticipantId) -> Result<Position, PortError>;

    /// Center the border on the given position.
    fn set_border_center(&mut self, position: Position) -> Result<(), PortError>;

    /// Move the participant to the given position, inside the border.
    fn teleport(
        &mut self,
        participant: ParticipantId,
        position: Position,
    ) -> Result<(), PortError>;

    /// Place the starter blocks beneath the given position so the first
    /// participant is guaranteed a viable start.
    fn place_starter_blocks(&mut self, position: Position) -> Result<(), PortError>;
}
