//! Zone policy entries and spatial positions.

use serde::{Deserialize, Serialize};

/// One entry of the zone policy: a named zone and whether its resource
/// limit tracks the ledger.
///
/// `tracked == true` means the zone's limit is derived from the ledger
/// size; `tracked == false` means the zone gets the fixed unrestricted
/// sentinel instead. Entries are read fresh from the policy store on every
/// recomputation so operator edits take effect without a restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneEntry {
    /// The zone's name, as known to the actuator.
    pub name: String,
    /// Whether the zone's limit is derived from the ledger size.
    pub tracked: bool,
}

impl ZoneEntry {
    /// Create a zone entry.
    pub fn new(name: impl Into<String>, tracked: bool) -> Self {
        Self {
            name: name.into(),
            tracked,
        }
    }
}

/// A position in a zone's coordinate space.
///
/// Used only by first-join world setup: centering the border on the first
/// participant's spawn and placing their starter blocks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal x coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Horizontal z coordinate.
    pub z: f64,
}

impl Position {
    /// Create a position.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Snap the horizontal coordinates to the center of their block
    /// (`floor + 0.5`), leaving the vertical coordinate untouched.
    ///
    /// The border center must sit on a block center or participants can
    /// clip through the edge at radius 1.
    pub fn block_centered(self) -> Self {
        Self {
            x: self.x.floor() + 0.5,
            y: self.y,
            z: self.z.floor() + 0.5,
        }
    }
}
