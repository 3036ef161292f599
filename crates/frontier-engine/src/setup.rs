//! Once-per-install first-join world initialization.
//!
//! The first time a participant ever connects, the border has no center
//! and the world has no guaranteed starting resources. Setup centers the
//! border zone on that participant's spawn, teleports them inside it, and
//! places starter blocks beneath them. The `setup_complete` flag persists
//! across restarts so this runs exactly once per install.

use tracing::{info, warn};

use frontier_config::ConfigStore;
use frontier_types::ParticipantId;

use crate::ports::WorldSetupActuator;

/// First-join setup state, guarded by the persisted `setup_complete` flag.
#[derive(Debug)]
pub struct FirstJoinSetup {
    /// Cached copy of the persisted flag; checked before touching config.
    complete: bool,
}

impl FirstJoinSetup {
    /// Create setup state from the persisted flag.
    pub const fn new(complete: bool) -> Self {
        Self { complete }
    }

    /// Whether setup has already run for this install.
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Run first-join setup for a joining participant, if still pending.
    ///
    /// Any actuator failure before the border center is applied aborts the
    /// attempt without setting the flag, so the next join retries. Failures
    /// after the center is set are logged but do not block completion: a
    /// centered border is the part that must not run twice.
    pub fn run<S: WorldSetupActuator>(
        &mut self,
        actuator: &mut S,
        store: &mut ConfigStore,
        config_name: &str,
        participant: ParticipantId,
    ) {
        if self.complete {
            return;
        }

        // The flag may have been set by operator tooling since attach.
        match store.get(config_name) {
            Ok(config) if config.setup_complete => {
                self.complete = true;
                return;
            }
            Ok(_) => {}
            Err(error) => {
                warn!(config = config_name, %error, "setup skipped: config unavailable");
                return;
            }
        }

        let spawn = match actuator.spawn_position(participant) {
            Ok(position) => position,
            Err(error) => {
                warn!(%participant, %error, "setup skipped: no spawn position");
                return;
            }
        };

        let center = spawn.block_centered();
        if let Err(error) = actuator.set_border_center(center) {
            warn!(%participant, %error, "setup skipped: could not center border");
            return;
        }

        // Keep the participant inside the freshly-centered border.
        if let Err(error) = actuator.teleport(participant, center) {
            warn!(%participant, %error, "setup teleport failed");
        }

        if let Err(error) = actuator.place_starter_blocks(spawn) {
            warn!(%participant, %error, "setup starter blocks failed");
        }

        self.complete = true;
        match store.get_mut(config_name) {
            Ok(config) => {
                config.setup_complete = true;
                if let Err(error) = store.save(config_name) {
                    // In-memory flag is set; the next save point persists it.
                    warn!(config = config_name, %error, "could not persist setup flag");
                }
            }
            Err(error) => {
                warn!(config = config_name, %error, "could not record setup flag");
            }
        }

        info!(%participant, "first-join world setup complete");
    }
}
