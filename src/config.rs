use crate::ai::SkillLevel;
use crate::ship::ShipKind;

/// Side length of the standard square board.
pub const DEFAULT_BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;

/// Fleet composition, largest first. Random placement walks this order.
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Destroyer,
    ShipKind::Submarine,
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 2 + 1;

/// Upper bound on draws made by `Board::random_cell` before giving up.
pub const MAX_SAMPLE_ATTEMPTS: usize = 10_000;

/// Upper bound on random placement attempts for a single ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Settings for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_size: usize,
    pub skill: SkillLevel,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            skill: SkillLevel::Expert,
        }
    }
}

/// Smallest board able to hold the largest ship of the fleet.
pub fn min_board_size() -> usize {
    FLEET.iter().map(|k| k.size()).max().unwrap_or(1)
}
