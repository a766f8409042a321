//! Game board: a square grid of cells plus the fleet that sails on it.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::cell::{Cell, CellState};
use crate::common::{BoardError, GuessResult};
use crate::config::{min_board_size, DEFAULT_BOARD_SIZE, MAX_SAMPLE_ATTEMPTS};
use crate::coordinate::{Coordinate, Direction};
use crate::fleet::Fleet;

/// One side's board. Cells are stored row-major; a cell's id is its index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    default_state: CellState,
    fleet: Fleet,
}

impl Board {
    /// Create a board of the standard size with every cell in `default_state`.
    pub fn new(default_state: CellState) -> Self {
        Self::build(DEFAULT_BOARD_SIZE, default_state)
    }

    /// Create a `size`×`size` board. Fails if the largest ship cannot fit.
    pub fn with_size(size: usize, default_state: CellState) -> Result<Self, BoardError> {
        if size < min_board_size() {
            return Err(BoardError::InvalidBoardSize(size));
        }
        Ok(Self::build(size, default_state))
    }

    fn build(size: usize, default_state: CellState) -> Self {
        let cells = (0..size * size)
            .map(|id| Cell::new(id, default_state))
            .collect();
        Board {
            size,
            cells,
            default_state,
            fleet: Fleet::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// State every cell had at construction.
    pub fn default_state(&self) -> CellState {
        self.default_state
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn fleet_mut(&mut self) -> &mut Fleet {
        &mut self.fleet
    }

    /// All cells in id order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, coord: Coordinate) -> Option<&Cell> {
        if !coord.is_inside(self.size) {
            return None;
        }
        self.cells.get(coord.to_id(self.size))
    }

    pub fn cell_at(&self, row: usize, column: usize) -> Option<&Cell> {
        self.cell(Coordinate::new(row, column))
    }

    pub fn cell_by_id(&self, id: usize) -> Option<&Cell> {
        self.cells.get(id)
    }

    pub fn state(&self, coord: Coordinate) -> Option<CellState> {
        self.cell(coord).map(Cell::state)
    }

    /// Coordinate of the cell with the given id.
    pub fn coord_of(&self, id: usize) -> Option<Coordinate> {
        (id < self.cells.len()).then(|| Coordinate::from_id(id, self.size))
    }

    pub fn set_state(&mut self, coord: Coordinate, state: CellState) -> Result<(), BoardError> {
        if !coord.is_inside(self.size) {
            return Err(BoardError::OutOfBounds(coord));
        }
        let id = coord.to_id(self.size);
        self.cells[id].set_state(state);
        Ok(())
    }

    /// Coordinate `step` positions away from `coord` towards `direction`.
    pub fn neighbor(&self, coord: Coordinate, direction: Direction, step: usize) -> Option<Coordinate> {
        let step = isize::try_from(step).ok()?;
        let (dr, dc) = direction.delta();
        let row = coord.row.checked_add_signed(dr.checked_mul(step)?)?;
        let column = coord.column.checked_add_signed(dc.checked_mul(step)?)?;
        let next = Coordinate::new(row, column);
        next.is_inside(self.size).then_some(next)
    }

    /// Cell `step` positions away from `coord`, or `None` past the edge.
    pub fn adjacent(&self, coord: Coordinate, direction: Direction, step: usize) -> Option<&Cell> {
        self.neighbor(coord, direction, step)
            .and_then(|next| self.cell(next))
    }

    /// Contiguous run of `len` cells starting at `origin`. `None` if the run
    /// leaves the board.
    pub fn span(&self, origin: Coordinate, direction: Direction, len: usize) -> Option<Vec<Coordinate>> {
        if !origin.is_inside(self.size) {
            return None;
        }
        let mut span = Vec::with_capacity(len);
        span.push(origin);
        for step in 1..len {
            span.push(self.neighbor(origin, direction, step)?);
        }
        Some(span)
    }

    /// Returns `true` if every listed cell is in `state`.
    pub fn all_of_state(&self, coords: &[Coordinate], state: CellState) -> bool {
        coords.iter().all(|&c| self.state(c) == Some(state))
    }

    pub fn is_state_present(&self, state: CellState) -> bool {
        self.cells.iter().any(|c| c.state() == state)
    }

    /// First cell in row-major order that is in `state`.
    pub fn find_first(&self, state: CellState) -> Option<&Cell> {
        self.cells.iter().find(|c| c.state() == state)
    }

    pub fn count_state(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    /// Uniformly sample a cell whose state equals `state` (`want_match`) or
    /// differs from it (`!want_match`).
    ///
    /// Draws blindly up to `MAX_SAMPLE_ATTEMPTS` times, then picks among the
    /// qualifying cells directly, so any board with a match yields one.
    pub fn random_cell<R: Rng + ?Sized>(
        &self,
        state: CellState,
        want_match: bool,
        rng: &mut R,
    ) -> Result<Coordinate, BoardError> {
        let qualifies = |cell: &Cell| (cell.state() == state) == want_match;
        if !self.cells.iter().any(qualifies) {
            return Err(BoardError::NoMatchingCell(state));
        }
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let id = rng.random_range(0..self.cells.len());
            if qualifies(&self.cells[id]) {
                return Ok(Coordinate::from_id(id, self.size));
            }
        }
        let ids: Vec<usize> = self
            .cells
            .iter()
            .filter(|&c| qualifies(c))
            .map(Cell::id)
            .collect();
        log::debug!(
            "random_cell: {} {}matches for {:?} left after {} draws, picking directly",
            ids.len(),
            if want_match { "" } else { "non-" },
            state,
            MAX_SAMPLE_ATTEMPTS
        );
        let id = ids[rng.random_range(0..ids.len())];
        Ok(Coordinate::from_id(id, self.size))
    }

    /// Rewrite every cell in `old` to `new`.
    pub fn replace_all(&mut self, old: CellState, new: CellState) {
        for cell in self.cells.iter_mut().filter(|c| c.state() == old) {
            cell.set_state(new);
        }
    }

    /// Rewrite every cell to `state`.
    pub fn reset(&mut self, state: CellState) {
        for cell in self.cells.iter_mut() {
            cell.set_state(state);
        }
    }

    /// Apply an incoming missile at `coord`, updating the cell and the fleet.
    ///
    /// Ship parts become `Hit`; unknown and open water become `Ocean`.
    pub fn receive_missile(&mut self, coord: Coordinate) -> Result<GuessResult, BoardError> {
        let state = self.state(coord).ok_or(BoardError::OutOfBounds(coord))?;
        let result = match state {
            CellState::ShipPart(kind) => {
                let sunk = self.fleet.update_hit(kind)?;
                self.set_state(coord, CellState::Hit)?;
                if sunk {
                    GuessResult::Sink(kind)
                } else {
                    GuessResult::Hit(kind)
                }
            }
            CellState::Hit => return Err(BoardError::AlreadyTargeted(coord)),
            CellState::Ocean if self.default_state == CellState::Unknown => {
                return Err(BoardError::AlreadyTargeted(coord))
            }
            CellState::Unknown | CellState::Ocean | CellState::AvailableForPlacement => {
                self.set_state(coord, CellState::Ocean)?;
                GuessResult::Miss
            }
        };
        log::debug!("missile at {} -> {:?}", coord, result);
        Ok(result)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let mut first = true;
            for cell in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.state().glyph())?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
