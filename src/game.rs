use rand::Rng;
use thiserror::Error;

use crate::{
    ai::TargetingEngine,
    board::Board,
    cell::CellState,
    common::{BoardError, GuessResult, TargetingError},
    config::GameConfig,
    coordinate::Coordinate,
};

/// Current status of a game, seen from the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Side expected to fire next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    Player,
    Computer,
}

/// Errors returned when a move cannot be played.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("it is not this side's turn")]
    NotYourTurn,
    #[error("the game is over")]
    GameOver,
    #[error("the player fleet is not fully placed")]
    FleetNotPlaced,
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Targeting(#[from] TargetingError),
}

/// A human versus computer game.
///
/// The human places ships on `player_board` and fires first. The computer's
/// fleet is placed at random on its own board when the game is created.
/// The human fleet is checked once, before the first shot; sunk ships leave
/// no `ShipPart` cells behind, so the check is not repeated afterwards.
pub struct Game {
    player_board: Board,
    computer: TargetingEngine,
    turn: Turn,
    turns_played: usize,
    started: bool,
}

impl Game {
    /// Create a game and lay out the computer fleet.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let player_board = Board::with_size(config.board_size, CellState::Ocean)?;
        let mut computer = TargetingEngine::with_size(config.skill, config.board_size)?;
        computer.place_fleet_randomly(rng)?;
        Ok(Self {
            player_board,
            computer,
            turn: Turn::Player,
            turns_played: 0,
            started: false,
        })
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// Mutable access to the human board for ship placement.
    pub fn player_board_mut(&mut self) -> &mut Board {
        &mut self.player_board
    }

    /// The computer's own board, hidden cells included.
    pub fn computer_board(&self) -> &Board {
        self.computer.board()
    }

    pub fn computer(&self) -> &TargetingEngine {
        &self.computer
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Number of missiles fired by both sides.
    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// Whether the first shot has been fired.
    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn status(&self) -> GameStatus {
        if self.player_board.fleet().is_destroyed() {
            GameStatus::Lost
        } else if self.computer.board().fleet().is_destroyed() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    fn check_turn(&mut self, side: Turn) -> Result<(), GameError> {
        if self.status() != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        if !self.started && !self.player_board.is_fleet_placed() {
            return Err(GameError::FleetNotPlaced);
        }
        if self.turn != side {
            return Err(GameError::NotYourTurn);
        }
        if !self.started {
            self.started = true;
            log::debug!("player fleet placed, game started");
        }
        Ok(())
    }

    /// Fire the human's missile at the computer board.
    pub fn player_fire(&mut self, target: Coordinate) -> Result<GuessResult, GameError> {
        self.check_turn(Turn::Player)?;
        let result = self.computer.board_mut().receive_missile(target)?;
        self.turn = Turn::Computer;
        self.turns_played += 1;
        Ok(result)
    }

    /// Let the computer pick a target and fire at the human board.
    pub fn computer_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Coordinate, GuessResult), GameError> {
        self.check_turn(Turn::Computer)?;
        let target = self.computer.find_target(rng)?;
        let result = self.player_board.receive_missile(target)?;
        self.computer.record_guess(target, result)?;
        self.turn = Turn::Player;
        self.turns_played += 1;
        Ok((target, result))
    }
}
