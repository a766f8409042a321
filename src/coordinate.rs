//! Grid addressing: coordinates and cardinal directions.

use core::fmt;

/// A (row, column) address on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Check whether the coordinate lies on a `size`×`size` board.
    pub const fn is_inside(&self, size: usize) -> bool {
        self.row < size && self.column < size
    }

    /// Row-major cell id on a `size`×`size` board.
    pub const fn to_id(&self, size: usize) -> usize {
        self.row * size + self.column
    }

    /// Inverse of [`Coordinate::to_id`].
    pub const fn from_id(id: usize, size: usize) -> Self {
        Self {
            row: id / size,
            column: id % size,
        }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Cardinal direction on the board.
///
/// The grid is stored row-major but directions are mapped transposed:
/// `North`/`South` move along the column index and `West`/`East` move along
/// the row index. Span checks and placement depend on this mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    /// All directions; each one is two positions away from its opposite.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Offset applied to (row, column) per step.
    pub(crate) const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }
}
