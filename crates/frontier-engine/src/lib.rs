//! Convergence engine for the Frontier border system.
//!
//! Many independent participants contribute to one shared, monotonically
//! growing set of unlocked milestones. This crate owns that convergence:
//! it folds every participant's local progress into the global ledger,
//! back-fills every participant to the ledger's contents so no one
//! regresses or diverges, and derives each named zone's border radius from
//! the ledger size.
//!
//! # Architecture
//!
//! - [`catalog`] -- Static classifier deciding which identifiers count.
//! - [`border`] -- Radius derivation constants and math.
//! - [`ports`] -- Capability traits the host implements (progress adapter,
//!   milestone registry, zone actuator, world-setup actuator).
//! - [`setup`] -- Once-per-install first-join world initialization.
//! - [`engine`] -- The [`BorderEngine`]: event handlers and orchestration.
//! - [`error`] -- The crate error type.
//!
//! The engine is constructed once, owns the [`Ledger`] and the
//! [`ConfigStore`], and is handed to the host as an
//! [`EventSink`](frontier_types::EventSink). There is no ambient singleton;
//! everything the engine touches is injected at construction.
//!
//! # Concurrency
//!
//! The host delivers events one at a time; each handler runs to completion
//! before the next begins, so the ledger needs no interior locking. A
//! multi-threaded host must serialize sink calls itself (one mutex around
//! the engine preserves the ordering the algorithms assume).
//!
//! [`Ledger`]: frontier_ledger::Ledger
//! [`ConfigStore`]: frontier_config::ConfigStore

pub mod border;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod ports;
pub mod setup;

// Re-export primary types at crate root.
pub use engine::{BorderEngine, EngineParams};
pub use error::EngineError;
pub use ports::{
    MilestoneRegistry, PortError, ProgressAdapter, WorldSetupActuator, ZoneActuator,
};
pub use setup::FirstJoinSetup;
