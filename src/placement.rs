//! Ship placement: random fleet layout and the manual preview/commit flow.

use alloc::vec::Vec;

use rand::Rng;

use crate::board::Board;
use crate::cell::CellState;
use crate::common::BoardError;
use crate::config::{FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::coordinate::{Coordinate, Direction};
use crate::ship::ShipKind;

/// Pick one of the four cardinal directions uniformly.
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    Direction::ALL[rng.random_range(0..Direction::ALL.len())]
}

impl Board {
    /// Whether a cell can receive part of a ship.
    fn is_free(&self, coord: Coordinate) -> bool {
        matches!(self.state(coord), Some(s) if s == self.default_state() || s == CellState::AvailableForPlacement)
    }

    /// Span for `kind` from `origin` if it fits on the board and every cell
    /// is free.
    pub fn available_span(
        &self,
        origin: Coordinate,
        direction: Direction,
        kind: ShipKind,
    ) -> Option<Vec<Coordinate>> {
        self.span(origin, direction, kind.size())
            .filter(|span| span.iter().all(|&c| self.is_free(c)))
    }

    /// Mark the span for `kind` as a placement preview. Returns `false` and
    /// leaves the board untouched when the span is not available.
    pub fn highlight_span(
        &mut self,
        origin: Coordinate,
        direction: Direction,
        kind: ShipKind,
    ) -> Result<bool, BoardError> {
        let Some(span) = self.available_span(origin, direction, kind) else {
            return Ok(false);
        };
        for coord in span {
            self.set_state(coord, CellState::AvailableForPlacement)?;
        }
        Ok(true)
    }

    /// Remove every preview marker.
    pub fn clear_highlights(&mut self) {
        self.replace_all(CellState::AvailableForPlacement, self.default_state());
    }

    /// Place `kind` from `origin` towards `direction`, then clear previews.
    pub fn place_ship(
        &mut self,
        kind: ShipKind,
        origin: Coordinate,
        direction: Direction,
    ) -> Result<(), BoardError> {
        if self.is_state_present(CellState::ShipPart(kind)) {
            return Err(BoardError::ShipAlreadyPlaced(kind));
        }
        let span = self
            .span(origin, direction, kind.size())
            .ok_or(BoardError::OutOfBounds(origin))?;
        if !span.iter().all(|&c| self.is_free(c)) {
            return Err(BoardError::ShipOverlaps(kind));
        }
        self.stamp(&span, kind)?;
        self.clear_highlights();
        Ok(())
    }

    /// Take `kind` off the board together with any preview markers.
    pub fn erase_ship(&mut self, kind: ShipKind) {
        self.replace_all(CellState::ShipPart(kind), self.default_state());
        self.clear_highlights();
    }

    /// Returns `true` when every ship of the fleet is on the board.
    ///
    /// Only meaningful while laying out: a sunk ship has no `ShipPart` cells.
    pub fn is_fleet_placed(&self) -> bool {
        FLEET
            .iter()
            .all(|&kind| self.is_state_present(CellState::ShipPart(kind)))
    }

    /// Place the whole fleet at random, largest ship first.
    ///
    /// Each ship draws a free origin and a direction until the span fits.
    /// There is no backtracking across ships; a ship that cannot be placed
    /// within `MAX_PLACEMENT_ATTEMPTS` draws fails the call.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for kind in FLEET {
            self.place_randomly(kind, rng)?;
        }
        Ok(())
    }

    fn place_randomly<R: Rng + ?Sized>(&mut self, kind: ShipKind, rng: &mut R) -> Result<(), BoardError> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let origin = self.random_cell(self.default_state(), true, rng)?;
            let direction = random_direction(rng);
            if let Some(span) = self.available_span(origin, direction, kind) {
                self.stamp(&span, kind)?;
                log::debug!("placed {} at {} heading {:?}", kind, origin, direction);
                return Ok(());
            }
        }
        log::warn!("gave up placing {} after {} attempts", kind, MAX_PLACEMENT_ATTEMPTS);
        Err(BoardError::UnableToPlaceShip(kind))
    }

    fn stamp(&mut self, span: &[Coordinate], kind: ShipKind) -> Result<(), BoardError> {
        for &coord in span {
            self.set_state(coord, CellState::ShipPart(kind))?;
        }
        Ok(())
    }
}
