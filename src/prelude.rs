//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, CellState, Coordinate, Direction, Fleet, Game, GameConfig, GameStatus, GuessResult,
    ShipKind, SkillLevel, TargetingEngine,
};
