//! The [`BorderEngine`]: event handlers and orchestration.
//!
//! The engine has two lifecycle states. **Cold** lasts for the duration of
//! [`BorderEngine::attach`], which seeds the ledger from persisted state
//! and from every connected participant, back-fills everyone, and applies
//! the derived limits once. The transition to **Warm** happens exactly
//! once and is never re-entered; after it the host registers the engine as
//! its [`EventSink`] and every change flows through the steady-state
//! handlers.
//!
//! # Ordering
//!
//! The host delivers events on a single logical sequence. Each handler is
//! a discrete unit of work: it mutates the ledger, back-fills, and
//! recomputes zones before the next handler starts. The connected set is
//! re-enumerated inside every handler, never cached across them, and a
//! participant disconnecting mid-iteration is skipped rather than failed.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use frontier_config::{ConfigStore, ConfigValue};
use frontier_ledger::Ledger;
use frontier_types::{EventSink, MilestoneId, ParticipantId};

use crate::border;
use crate::catalog;
use crate::error::EngineError;
use crate::ports::{MilestoneRegistry, ProgressAdapter, WorldSetupActuator, ZoneActuator};
use crate::setup::FirstJoinSetup;

/// Everything the engine needs at construction.
///
/// There is no ambient singleton anywhere in this crate: the store, the
/// host ports, and the config name are injected here once and owned by the
/// engine afterwards.
pub struct EngineParams<P, R, Z, S> {
    /// The configuration store backing persistence and zone policy.
    pub store: ConfigStore,
    /// Name of the configuration record for this install.
    pub config_name: String,
    /// The host's participant progress adapter.
    pub progress: P,
    /// The host's full milestone registry.
    pub registry: R,
    /// The host's zone actuator.
    pub zone_actuator: Z,
    /// The host's world-setup actuator.
    pub setup_actuator: S,
}

/// The convergence engine: sole owner of the [`Ledger`].
#[derive(Debug)]
pub struct BorderEngine<P, R, Z, S> {
    /// The shared milestone ledger. Mutated only inside handler bodies.
    ledger: Ledger,
    /// Configuration store: zone policy, offset, persisted milestones.
    store: ConfigStore,
    /// Name of this install's configuration record.
    config_name: String,
    /// Host port: participant completion state.
    progress: P,
    /// Host port: live milestone registry.
    registry: R,
    /// Host port: zone border actuator.
    zone_actuator: Z,
    /// Host port: world-setup actuator.
    setup_actuator: S,
    /// First-join setup state.
    setup: FirstJoinSetup,
}

impl<P, R, Z, S> BorderEngine<P, R, Z, S>
where
    P: ProgressAdapter,
    R: MilestoneRegistry,
    Z: ZoneActuator,
    S: WorldSetupActuator,
{
    /// Attach the engine: the Cold-to-Warm transition.
    ///
    /// Runs synchronously, exactly once:
    ///
    /// 1. rehydrate the ledger from the persisted identifier list,
    /// 2. fold every connected participant's tracked completions in,
    /// 3. back-fill every connected participant to the full ledger,
    /// 4. recompute all zones.
    ///
    /// The host must call this strictly before registering the engine for
    /// events so the persistence load is never interleaved with handlers.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the configuration record cannot
    /// be created or read. Steady-state conditions (stale participants,
    /// unresolvable identifiers or zones) are not errors.
    pub fn attach(params: EngineParams<P, R, Z, S>) -> Result<Self, EngineError> {
        let mut store = params.store;
        let _created = store.create_if_absent(&params.config_name)?;
        let setup_complete = store.get(&params.config_name)?.setup_complete;

        let mut engine = Self {
            ledger: Ledger::new(),
            store,
            config_name: params.config_name,
            progress: params.progress,
            registry: params.registry,
            zone_actuator: params.zone_actuator,
            setup_actuator: params.setup_actuator,
            setup: FirstJoinSetup::new(setup_complete),
        };

        engine.rehydrate()?;
        engine.converge_connected();
        engine.recompute_zones();
        info!(milestones = engine.ledger.len(), "border engine warm");
        Ok(engine)
    }

    /// The shared milestone ledger.
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Whether first-join world setup has run for this install.
    pub const fn is_setup_complete(&self) -> bool {
        self.setup.is_complete()
    }

    // -----------------------------------------------------------------------
    // Cold start
    // -----------------------------------------------------------------------

    /// Seed the ledger from the persisted identifier list.
    ///
    /// Each stored identifier must still classify as tracked and resolve
    /// against the live registry; anything else (renamed or removed
    /// content) is dropped silently.
    fn rehydrate(&mut self) -> Result<(), EngineError> {
        let stored = self.store.get(&self.config_name)?.milestones.clone();
        let mut dropped: usize = 0;

        for raw in stored {
            let id = MilestoneId::from(raw);
            if catalog::is_tracked(&id) && self.registry.resolve(&id).is_some() {
                let _ = self.ledger.insert(id);
            } else {
                dropped = dropped.saturating_add(1);
            }
        }

        if dropped > 0 {
            debug!(dropped, "dropped stored identifiers that no longer resolve");
        }
        info!(restored = self.ledger.len(), "ledger rehydrated");
        Ok(())
    }

    /// Fold every connected participant's progress into the ledger, then
    /// back-fill each of them to the ledger's full contents.
    fn converge_connected(&mut self) {
        for participant in self.progress.connected() {
            for id in self.tracked_completions(participant) {
                let _ = self.ledger.insert(id);
            }
        }

        for participant in self.progress.connected() {
            self.backfill_all(participant);
        }
    }

    // -----------------------------------------------------------------------
    // Back-fill
    // -----------------------------------------------------------------------

    /// Mark one milestone complete for one participant, tolerating the
    /// participant having disconnected since enumeration.
    fn mark(&mut self, participant: ParticipantId, id: &MilestoneId) {
        if let Err(error) = self.progress.mark_complete(participant, id) {
            warn!(%participant, milestone = %id, %error, "back-fill skipped");
        }
    }

    /// Back-fill every ledger entry the participant is missing.
    fn backfill_all(&mut self, participant: ParticipantId) {
        let completed = match self.progress.list_completed(participant) {
            Ok(completed) => completed,
            Err(error) => {
                warn!(%participant, %error, "back-fill skipped: progress unavailable");
                return;
            }
        };

        let missing: Vec<MilestoneId> = self
            .ledger
            .iter()
            .filter(|id| !completed.contains(*id))
            .cloned()
            .collect();

        for id in &missing {
            self.mark(participant, id);
        }
    }

    /// The participant's completed milestones, filtered through the
    /// catalog. A stale participant yields the empty set.
    fn tracked_completions(&self, participant: ParticipantId) -> BTreeSet<MilestoneId> {
        match self.progress.list_completed(participant) {
            Ok(completed) => completed
                .into_iter()
                .filter(catalog::is_tracked)
                .collect(),
            Err(error) => {
                warn!(%participant, %error, "progress unavailable; treating as none");
                BTreeSet::new()
            }
        }
    }

    // -----------------------------------------------------------------------
    // Zone recomputation
    // -----------------------------------------------------------------------

    /// Re-derive and apply every zone's limit from the current ledger size.
    ///
    /// The policy is read fresh from the store on every call so operator
    /// edits take effect without a restart. A zone the actuator cannot
    /// resolve is skipped with a warning; it never aborts the rest.
    fn recompute_zones(&mut self) {
        let (entries, offset) = match self.store.get(&self.config_name) {
            Ok(config) => (config.zone_entries(), config.starting_offset),
            Err(error) => {
                warn!(config = %self.config_name, %error, "zone recomputation skipped");
                return;
            }
        };

        let milestones = self.ledger.len();
        for entry in entries {
            let radius = border::limit_for(milestones, offset, entry.tracked);
            match self
                .zone_actuator
                .set_zone_limit(&entry.name, radius, border::CENTER_BIAS)
            {
                Ok(()) => debug!(zone = %entry.name, radius, "zone limit applied"),
                Err(error) => warn!(zone = %entry.name, %error, "zone skipped"),
            }
        }
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Persist the ledger's identifier snapshot.
    ///
    /// The host calls this on shutdown, strictly after deregistering from
    /// events. A write failure leaves the in-memory ledger untouched and
    /// is retried at the next natural save point.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the record is missing or the
    /// write fails.
    pub fn save(&mut self) -> Result<(), EngineError> {
        let snapshot = self.ledger.snapshot_identifiers();
        let count = snapshot.len();
        self.store.get_mut(&self.config_name)?.milestones = snapshot;

        if let Err(error) = self.store.save(&self.config_name) {
            warn!(config = %self.config_name, %error, "ledger snapshot not persisted");
            return Err(error.into());
        }

        info!(milestones = count, "ledger snapshot persisted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Operator surface
    // -----------------------------------------------------------------------

    /// Apply an operator edit to a scalar config field, persist it, and
    /// recompute zones so the edit takes effect immediately.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] for an unknown field, a wrong-typed
    /// or out-of-range value, or a failed save.
    pub fn apply_config_edit(
        &mut self,
        field: &str,
        value: &ConfigValue,
    ) -> Result<(), EngineError> {
        self.store
            .get_mut(&self.config_name)?
            .apply_field(field, value)?;
        self.store.save(&self.config_name)?;
        self.recompute_zones();
        Ok(())
    }

    /// Set whether a zone's limit tracks the ledger, persist the policy,
    /// and recompute zones.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the record is missing or the
    /// save fails.
    pub fn set_zone_tracked(&mut self, zone: &str, tracked: bool) -> Result<(), EngineError> {
        self.store
            .get_mut(&self.config_name)?
            .set_zone_tracked(zone, tracked);
        self.store.save(&self.config_name)?;
        self.recompute_zones();
        Ok(())
    }

    /// Reload a named configuration from disk and recompute zones.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] with a not-found condition when no
    /// configuration has that name. Never fatal to the engine.
    pub fn reload_config(&mut self, name: &str) -> Result<(), EngineError> {
        self.store.reload(name)?;
        if name == self.config_name {
            self.recompute_zones();
        }
        Ok(())
    }
}

impl<P, R, Z, S> EventSink for BorderEngine<P, R, Z, S>
where
    P: ProgressAdapter,
    R: MilestoneRegistry,
    Z: ZoneActuator,
    S: WorldSetupActuator,
{
    /// Fold the joiner's progress into the ledger, propagate anything new
    /// to everyone else, back-fill the joiner, and recompute zones.
    fn on_participant_connected(&mut self, participant: ParticipantId) {
        self.setup.run(
            &mut self.setup_actuator,
            &mut self.store,
            &self.config_name,
            participant,
        );

        let completed = self.tracked_completions(participant);

        let mut newly: Vec<MilestoneId> = Vec::new();
        for id in &completed {
            if self.ledger.insert(id.clone()) {
                newly.push(id.clone());
            }
        }

        if !newly.is_empty() {
            info!(%participant, count = newly.len(), "joiner contributed new milestones");
            for other in self.progress.connected() {
                if other == participant {
                    continue;
                }
                for id in &newly {
                    self.mark(other, id);
                }
            }
        }

        // Back-fill the joiner with everything they are missing.
        let missing: Vec<MilestoneId> = self
            .ledger
            .iter()
            .filter(|id| !completed.contains(*id))
            .cloned()
            .collect();
        for id in &missing {
            self.mark(participant, id);
        }

        self.recompute_zones();
    }

    /// The ledger never shrinks, so departure needs no recomputation.
    fn on_participant_disconnected(&mut self, participant: ParticipantId) {
        debug!(%participant, "participant disconnected");
    }

    /// Classify, insert, propagate to every connected participant, and
    /// recompute zones.
    ///
    /// The identifier alone is authoritative: this handler never consults
    /// the discovering participant's completion state, because the host
    /// fires the same event for spurious unlocks and only the catalog can
    /// tell them apart.
    fn on_milestone_discovered(&mut self, participant: ParticipantId, milestone: &MilestoneId) {
        if !catalog::is_tracked(milestone) {
            return;
        }

        if self.ledger.insert(milestone.clone()) {
            info!(%participant, milestone = %milestone, size = self.ledger.len(), "milestone discovered");
        }

        // Propagate even when already present: another participant may have
        // completed the same milestone near-simultaneously, and the
        // discoverer's own completion may still be pending host-side.
        for connected in self.progress.connected() {
            self.mark(connected, milestone);
        }

        self.recompute_zones();
    }
}
