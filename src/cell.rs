use core::fmt;

use crate::ship::ShipKind;

/// State of a single grid location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Hidden by the fog of war.
    Unknown,
    /// Known to hold nothing.
    Ocean,
    /// Intact segment of a ship.
    ShipPart(ShipKind),
    /// Ship segment struck by a missile.
    Hit,
    /// Placement preview marker.
    AvailableForPlacement,
}

impl CellState {
    pub fn is_ship(&self) -> bool {
        matches!(self, CellState::ShipPart(_))
    }

    /// Ship the state belongs to, if any.
    pub fn ship_kind(&self) -> Option<ShipKind> {
        match self {
            CellState::ShipPart(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CellState::Unknown => "Unknown",
            CellState::Ocean => "Ocean",
            CellState::ShipPart(kind) => kind.name(),
            CellState::Hit => "Hit",
            CellState::AvailableForPlacement => "Available",
        }
    }

    /// Single character used by the text rendering of a board.
    pub fn glyph(&self) -> char {
        match self {
            CellState::Unknown => '?',
            CellState::Ocean => '~',
            CellState::ShipPart(ShipKind::Carrier) => 'C',
            CellState::ShipPart(ShipKind::Battleship) => 'B',
            CellState::ShipPart(ShipKind::Cruiser) => 'R',
            CellState::ShipPart(ShipKind::Destroyer) => 'D',
            CellState::ShipPart(ShipKind::Submarine) => 'S',
            CellState::Hit => 'X',
            CellState::AvailableForPlacement => '+',
        }
    }
}

impl From<ShipKind> for CellState {
    fn from(kind: ShipKind) -> Self {
        CellState::ShipPart(kind)
    }
}

/// One location of a board, identified by its row-major id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    id: usize,
    state: CellState,
}

impl Cell {
    pub(crate) fn new(id: usize, state: CellState) -> Self {
        Self { id, state }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    /// Display label, e.g. `[42 - Ocean]`.
    pub fn label(&self) -> CellLabel<'_> {
        CellLabel(self)
    }
}

/// Lazily formatted label of a [`Cell`].
pub struct CellLabel<'a>(&'a Cell);

impl fmt::Display for CellLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.0.id, self.0.state.description())
    }
}
