//! World events and the sink trait the engine implements.
//!
//! The host process owns the event loop and delivers events one at a time
//! on a single logical sequence. The engine implements [`EventSink`]; the
//! host invokes one method per event kind. This replaces listener-style
//! dispatch with an explicit, minimal contract: the core stays free of
//! inheritance hierarchies and the host stays free of engine internals.

use serde::{Deserialize, Serialize};

use crate::ids::ParticipantId;
use crate::milestone::MilestoneId;

/// A world event as delivered by the host's event source.
///
/// Useful for hosts that queue events before dispatching them into an
/// [`EventSink`]; the engine itself only sees the individual sink calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldEvent {
    /// A participant connected to the world.
    ParticipantConnected {
        /// The joining participant.
        participant: ParticipantId,
    },
    /// A participant disconnected from the world.
    ParticipantDisconnected {
        /// The departing participant.
        participant: ParticipantId,
    },
    /// A participant completed something the host reports as a milestone.
    ///
    /// The identifier is not guaranteed to be a real milestone: the host
    /// fires this event for spurious unlocks too (recipes, for one), with
    /// the same shape. Classification is the receiver's job.
    MilestoneDiscovered {
        /// The participant that triggered the event.
        participant: ParticipantId,
        /// The raw identifier the host reported.
        milestone: MilestoneId,
    },
}

/// The event contract between the host and the convergence engine.
///
/// The host guarantees that no two sink calls execute concurrently: one
/// handler completes fully before the next begins. Implementations must
/// still tolerate the connected-participant set changing between calls.
pub trait EventSink {
    /// A participant connected.
    fn on_participant_connected(&mut self, participant: ParticipantId);

    /// A participant disconnected.
    fn on_participant_disconnected(&mut self, participant: ParticipantId);

    /// The host reported a milestone-shaped unlock for a participant.
    fn on_milestone_discovered(&mut self, participant: ParticipantId, milestone: &MilestoneId);

    /// Dispatch a queued [`WorldEvent`] to the matching handler.
    fn handle(&mut self, event: &WorldEvent) {
        match event {
            WorldEvent::ParticipantConnected { participant } => {
                self.on_participant_connected(*participant);
            }
            WorldEvent::ParticipantDisconnected { participant } => {
                self.on_participant_disconnected(*participant);
            }
            WorldEvent::MilestoneDiscovered {
                participant,
                milestone,
            } => {
                self.on_milestone_discovered(*participant, milestone);
            }
        }
    }
}
