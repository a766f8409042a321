//! Common types: board errors, targeting errors and missile results.

use thiserror::Error;

use crate::cell::CellState;
use crate::coordinate::Coordinate;
use crate::ship::ShipKind;

/// Result of a missile landing on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Missile landed in open water.
    Miss,
    /// Missile hit a segment of the given ship, which is still afloat.
    Hit(ShipKind),
    /// Missile hit the last intact segment of the given ship.
    Sink(ShipKind),
}

impl GuessResult {
    /// Ship struck by the missile, if any.
    pub fn ship(&self) -> Option<ShipKind> {
        match self {
            GuessResult::Miss => None,
            GuessResult::Hit(kind) | GuessResult::Sink(kind) => Some(*kind),
        }
    }
}

/// Errors returned by board, fleet and placement operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coordinate),
    #[error("board size {0} cannot hold the fleet")]
    InvalidBoardSize(usize),
    #[error("no cell matches the requested state {0:?}")]
    NoMatchingCell(CellState),
    #[error("unable to place {0}")]
    UnableToPlaceShip(ShipKind),
    #[error("{0} is already placed on the board")]
    ShipAlreadyPlaced(ShipKind),
    #[error("{0} placement overlaps another ship")]
    ShipOverlaps(ShipKind),
    #[error("{0} is already destroyed")]
    ShipAlreadyDestroyed(ShipKind),
    #[error("cell {0} was already targeted")]
    AlreadyTargeted(Coordinate),
    #[error("ship name not found in the fleet catalog")]
    UnknownShipName,
}

/// Errors returned while choosing the next target.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetingError {
    /// Every cell of the shadow board has already been revealed.
    #[error("no unknown cell left to target")]
    NoTargetAvailable,
    #[error(transparent)]
    Board(#[from] BoardError),
}
