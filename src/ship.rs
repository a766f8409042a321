//! Ship catalog and per-ship damage tracking.

use core::fmt;

use crate::config::FLEET;

/// Kind of ship. Sizes and names are fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Destroyer,
    Submarine,
}

impl ShipKind {
    /// Number of cells the ship occupies.
    pub const fn size(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Destroyer => 2,
            ShipKind::Submarine => 1,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
        }
    }

    /// Look up a kind by its name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        FLEET
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.size())
    }
}

/// A ship of a fleet, counting its segments not yet hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    remaining_segments: usize,
}

impl Ship {
    /// Create an intact ship.
    pub const fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            remaining_segments: kind.size(),
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn size(&self) -> usize {
        self.kind.size()
    }

    /// Segments not yet hit.
    pub fn remaining_segments(&self) -> usize {
        self.remaining_segments
    }

    /// Check if every segment has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.remaining_segments == 0
    }

    /// Remove one segment. Returns `false` if the ship was already destroyed.
    pub(crate) fn take_hit(&mut self) -> bool {
        if self.remaining_segments == 0 {
            return false;
        }
        self.remaining_segments -= 1;
        true
    }
}
