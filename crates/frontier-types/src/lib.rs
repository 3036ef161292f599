//! Shared type definitions for the Frontier border engine.
//!
//! This crate is the single source of truth for the types used across the
//! Frontier workspace: milestone identifiers, participant handles, zone
//! policy entries, and the event contract between the host process and the
//! convergence engine.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for entity identifiers
//! - [`milestone`] -- Milestone identifiers and resolved milestones
//! - [`zone`] -- Zone policy entries and spatial positions
//! - [`events`] -- World events and the sink trait the engine implements

pub mod events;
pub mod ids;
pub mod milestone;
pub mod zone;

// Re-export all public types at crate root for convenience.
pub use events::{EventSink, WorldEvent};
pub use ids::ParticipantId;
pub use milestone::{Milestone, MilestoneId};
pub use zone::{Position, ZoneEntry};
