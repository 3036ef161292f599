//! The shared milestone ledger for the Frontier border engine.
//!
//! The ledger is the single source of truth for "how many milestones are
//! unlocked" across the whole world. Every participant's local completion
//! view converges to it, and every tracked zone's resource limit is derived
//! from its size.
//!
//! # Invariants
//!
//! - **Monotonic**: milestones are inserted, never removed. The ledger's
//!   size is non-decreasing over the process lifetime.
//! - **Deduplicated**: membership is by identifier; re-inserting an
//!   identifier any number of times changes nothing after the first.
//! - **Single-writer**: only the convergence engine mutates the ledger, and
//!   only inside event-handler bodies. The host's one-handler-at-a-time
//!   delivery guarantee is the only concurrency contract.
//!
//! # Usage
//!
//! ```
//! use frontier_ledger::Ledger;
//! use frontier_types::MilestoneId;
//!
//! let mut ledger = Ledger::new();
//! assert!(ledger.insert(MilestoneId::from("base:story/mine_stone")));
//! assert!(!ledger.insert(MilestoneId::from("base:story/mine_stone")));
//! assert_eq!(ledger.len(), 1);
//! ```

pub mod ledger;

pub use ledger::Ledger;
