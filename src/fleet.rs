//! Fleet bookkeeping: which ships are still afloat.

use crate::common::BoardError;
use crate::config::{FLEET, NUM_SHIPS};
use crate::ship::{Ship, ShipKind};

/// The five ships of one side.
///
/// Destruction is one-way: no operation restores a segment, `remaining_ships`
/// only decreases and `fleet_destroyed` never flips back once set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: [Ship; NUM_SHIPS],
    remaining_ships: usize,
    fleet_destroyed: bool,
    last_hit_ship_destroyed: bool,
}

impl Fleet {
    /// Create a fleet with every ship intact.
    pub fn new() -> Self {
        Self {
            ships: FLEET.map(Ship::new),
            remaining_ships: NUM_SHIPS,
            fleet_destroyed: false,
            last_hit_ship_destroyed: false,
        }
    }

    /// Ships in placement order, largest first.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn number_of_ships(&self) -> usize {
        self.ships.len()
    }

    pub fn find_ship(&self, kind: ShipKind) -> Option<&Ship> {
        self.ships.iter().find(|s| s.kind() == kind)
    }

    /// Ships not yet destroyed.
    pub fn remaining_ships(&self) -> usize {
        self.remaining_ships
    }

    /// Returns `true` once every ship has been destroyed.
    pub fn is_destroyed(&self) -> bool {
        self.fleet_destroyed
    }

    /// Whether the ship hit by the latest [`Fleet::update_hit`] went down.
    pub fn last_hit_destroyed(&self) -> bool {
        self.last_hit_ship_destroyed
    }

    /// Register a hit on `kind`. Returns `true` if this hit destroyed it.
    pub fn update_hit(&mut self, kind: ShipKind) -> Result<bool, BoardError> {
        let ship = self
            .ships
            .iter_mut()
            .find(|s| s.kind() == kind)
            .ok_or(BoardError::UnknownShipName)?;
        if !ship.take_hit() {
            return Err(BoardError::ShipAlreadyDestroyed(kind));
        }
        self.last_hit_ship_destroyed = ship.is_destroyed();
        if self.last_hit_ship_destroyed {
            self.remaining_ships -= 1;
            if self.remaining_ships == 0 {
                self.fleet_destroyed = true;
            }
        }
        Ok(self.last_hit_ship_destroyed)
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
