//! Computer opponent: chooses where to fire on the opponent's board.
//!
//! The engine keeps a shadow copy of the opponent board holding only what has
//! been revealed so far. Three skill levels read it differently:
//!
//! - `Beginner` fires at any unknown cell.
//! - `Medium` fires at the centre of an unknown run long enough to hold the
//!   largest ship still afloat.
//! - `Expert` behaves like `Medium` until it lands a hit, then scores the
//!   neighbours of each hit and fires at the best scored cell.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use rand::Rng;

use crate::board::Board;
use crate::cell::CellState;
use crate::common::{BoardError, GuessResult, TargetingError};
use crate::coordinate::{Coordinate, Direction};
use crate::ship::ShipKind;

/// Strength of the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum SkillLevel {
    Beginner,
    Medium,
    Expert,
}

/// Target selection state for one computer player.
#[derive(Debug, Clone)]
pub struct TargetingEngine {
    skill: SkillLevel,
    /// The computer's own board.
    board: Board,
    /// What is known about the opponent's board.
    shadow: Board,
    /// Opponent ships not yet confirmed destroyed, with their sizes.
    adverse_ships: BTreeMap<ShipKind, usize>,
    /// Candidate cell ids with their accumulated score.
    future_targets: BTreeMap<usize, u32>,
    last_targeted: Option<usize>,
}

impl TargetingEngine {
    /// Create an engine playing on a board of the standard size.
    pub fn new(skill: SkillLevel) -> Self {
        Self::from_boards(
            skill,
            Board::new(CellState::Unknown),
            Board::new(CellState::Unknown),
        )
    }

    /// Create an engine for `size`×`size` boards.
    pub fn with_size(skill: SkillLevel, size: usize) -> Result<Self, BoardError> {
        Ok(Self::from_boards(
            skill,
            Board::with_size(size, CellState::Unknown)?,
            Board::with_size(size, CellState::Unknown)?,
        ))
    }

    fn from_boards(skill: SkillLevel, board: Board, shadow: Board) -> Self {
        // Both sides sail the same fleet.
        let adverse_ships = board
            .fleet()
            .ships()
            .iter()
            .map(|ship| (ship.kind(), ship.size()))
            .collect();
        Self {
            skill,
            board,
            shadow,
            adverse_ships,
            future_targets: BTreeMap::new(),
            last_targeted: None,
        }
    }

    pub fn skill(&self) -> SkillLevel {
        self.skill
    }

    /// The computer's own board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Current belief about the opponent board.
    pub fn shadow(&self) -> &Board {
        &self.shadow
    }

    /// Cell chosen by the latest [`TargetingEngine::find_target`].
    pub fn last_targeted(&self) -> Option<Coordinate> {
        self.last_targeted.and_then(|id| self.shadow.coord_of(id))
    }

    /// Queued hunt candidates with their scores, in cell id order.
    pub fn future_targets(&self) -> impl Iterator<Item = (Coordinate, u32)> + '_ {
        let size = self.shadow.size();
        self.future_targets
            .iter()
            .map(move |(&id, &score)| (Coordinate::from_id(id, size), score))
    }

    /// Opponent ships still believed afloat.
    pub fn adverse_ships(&self) -> impl Iterator<Item = (ShipKind, usize)> + '_ {
        self.adverse_ships.iter().map(|(&kind, &size)| (kind, size))
    }

    /// Lay out the computer's own fleet at random.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.board.place_fleet_randomly(rng)
    }

    /// Forget an opponent ship once it is known to be destroyed.
    pub fn notify_ship_destroyed(&mut self, kind: ShipKind) {
        if self.adverse_ships.remove(&kind).is_some() {
            log::debug!("opponent {} destroyed, {} left", kind, self.adverse_ships.len());
        }
    }

    /// Same as [`TargetingEngine::notify_ship_destroyed`], by ship name.
    pub fn notify_ship_destroyed_by_name(&mut self, name: &str) -> Result<(), BoardError> {
        let kind = ShipKind::from_name(name).ok_or(BoardError::UnknownShipName)?;
        self.notify_ship_destroyed(kind);
        Ok(())
    }

    /// Write the revealed state of an opponent cell into the shadow board.
    pub fn record_result(&mut self, coord: Coordinate, observed: CellState) -> Result<(), BoardError> {
        self.shadow.set_state(coord, observed)
    }

    /// Mirror the outcome of a missile fired at `coord`.
    pub fn record_guess(&mut self, coord: Coordinate, result: GuessResult) -> Result<(), BoardError> {
        let observed = match result {
            GuessResult::Miss => CellState::Ocean,
            GuessResult::Hit(kind) | GuessResult::Sink(kind) => CellState::ShipPart(kind),
        };
        self.record_result(coord, observed)?;
        if let GuessResult::Sink(kind) = result {
            self.notify_ship_destroyed(kind);
        }
        Ok(())
    }

    /// Choose the next cell to fire at according to the skill level.
    pub fn find_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coordinate, TargetingError> {
        let id = match self.skill {
            SkillLevel::Beginner => self.beginner_target(rng)?,
            SkillLevel::Medium => self.medium_target(rng)?,
            SkillLevel::Expert => self.expert_target(rng)?,
        };
        self.last_targeted = Some(id);
        let target = self.shadow.coord_of(id).ok_or(TargetingError::NoTargetAvailable)?;
        log::debug!("{:?} targets {}", self.skill, target);
        Ok(target)
    }

    fn beginner_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, TargetingError> {
        match self.shadow.random_cell(CellState::Unknown, true, rng) {
            Ok(coord) => Ok(coord.to_id(self.shadow.size())),
            Err(BoardError::NoMatchingCell(_)) => Err(TargetingError::NoTargetAvailable),
            Err(err) => Err(err.into()),
        }
    }

    fn medium_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, TargetingError> {
        let largest = match self.adverse_ships.values().copied().max() {
            Some(size) if size > 1 => size,
            _ => return self.beginner_target(rng),
        };
        let candidates = self.span_centers(largest);
        if candidates.is_empty() {
            log::debug!("no unknown span of {} left, falling back to random", largest);
            return self.beginner_target(rng);
        }
        Ok(candidates[rng.random_range(0..candidates.len())])
    }

    fn expert_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, TargetingError> {
        let Some(last) = self.last_targeted else {
            return self.medium_target(rng);
        };
        let Some(coord) = self.shadow.coord_of(last) else {
            return self.medium_target(rng);
        };
        match self.shadow.state(coord) {
            Some(CellState::Ocean) => {}
            Some(CellState::ShipPart(_) | CellState::Hit) => self.score_neighbors(coord),
            _ => return self.medium_target(rng),
        }
        match self.take_best_future_target() {
            Some(id) => Ok(id),
            None => self.medium_target(rng),
        }
    }

    /// Unknown cells that can be the centre of an unknown run of `len`.
    pub fn span_centers(&self, len: usize) -> Vec<usize> {
        self.shadow
            .cells()
            .iter()
            .filter(|cell| cell.state() == CellState::Unknown)
            .map(|cell| cell.id())
            .filter(|&id| {
                self.shadow
                    .coord_of(id)
                    .is_some_and(|coord| self.is_span_center(coord, len))
            })
            .collect()
    }

    /// Whether a ship of `len` cells could be centred on `coord`.
    ///
    /// Odd lengths need equal arms of `len / 2` on both sides of one axis.
    /// Even lengths put the centre between two cells, so one arm is
    /// `len / 2` and the opposite arm `len / 2 - 1`, in either order.
    pub fn is_span_center(&self, coord: Coordinate, len: usize) -> bool {
        use Direction::*;
        let half = len / 2;
        let arm = |direction, arm_len| self.is_unknown_arm(coord, direction, arm_len);
        if len % 2 == 1 {
            (arm(North, half) && arm(South, half)) || (arm(West, half) && arm(East, half))
        } else {
            let short = half.saturating_sub(1);
            (arm(North, short) && arm(South, half))
                || (arm(North, half) && arm(South, short))
                || (arm(West, short) && arm(East, half))
                || (arm(West, half) && arm(East, short))
        }
    }

    fn is_unknown_arm(&self, coord: Coordinate, direction: Direction, len: usize) -> bool {
        (1..=len).all(|step| {
            self.shadow
                .adjacent(coord, direction, step)
                .is_some_and(|cell| cell.state() == CellState::Unknown)
        })
    }

    /// Raise the score of unknown cells around a hit at `coord`.
    ///
    /// A neighbour already known to be ship redirects its point to the cell on
    /// the opposite side, following the ship's axis.
    fn score_neighbors(&mut self, coord: Coordinate) {
        let neighbors = Direction::ALL.map(|direction| self.shadow.neighbor(coord, direction, 1));
        for (i, neighbor) in neighbors.iter().enumerate() {
            let Some(neighbor) = *neighbor else {
                continue;
            };
            match self.shadow.state(neighbor) {
                Some(CellState::Unknown) => self.bump_score(neighbor),
                Some(CellState::ShipPart(_) | CellState::Hit) => {
                    if let Some(opposite) = neighbors[(i + 2) % neighbors.len()] {
                        if self.shadow.state(opposite) == Some(CellState::Unknown) {
                            self.bump_score(opposite);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn bump_score(&mut self, coord: Coordinate) {
        let id = coord.to_id(self.shadow.size());
        *self.future_targets.entry(id).or_insert(0) += 1;
    }

    /// Remove and return the best scored candidate, lowest id on ties.
    /// Candidates revealed since they were queued are dropped.
    fn take_best_future_target(&mut self) -> Option<usize> {
        let shadow = &self.shadow;
        self.future_targets
            .retain(|&id, _| shadow.cell_by_id(id).is_some_and(|c| c.state() == CellState::Unknown));
        let mut best: Option<(usize, u32)> = None;
        for (&id, &score) in &self.future_targets {
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((id, score));
            }
        }
        let (id, score) = best?;
        self.future_targets.remove(&id);
        log::debug!(
            "hunting cell {} (score {}), {} candidates left",
            id,
            score,
            self.future_targets.len()
        );
        Some(id)
    }
}

impl Default for TargetingEngine {
    fn default() -> Self {
        Self::new(SkillLevel::Expert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BOARD_SIZE;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn expert_scores_all_four_neighbours_of_a_fresh_hit() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut engine = TargetingEngine::new(SkillLevel::Expert);
        let hit = Coordinate::new(5, 5);
        engine
            .record_result(hit, CellState::ShipPart(ShipKind::Carrier))
            .unwrap();
        engine.last_targeted = Some(hit.to_id(DEFAULT_BOARD_SIZE));

        let expected = [
            Coordinate::new(4, 5),
            Coordinate::new(6, 5),
            Coordinate::new(5, 4),
            Coordinate::new(5, 6),
        ];
        let mut scored_copy = engine.clone();
        scored_copy.score_neighbors(hit);
        let mut scored: Vec<_> = scored_copy.future_targets().collect();
        scored.sort();
        let mut want: Vec<_> = expected.iter().map(|&c| (c, 1)).collect();
        want.sort();
        assert_eq!(scored, want);

        let target = engine.find_target(&mut rng).unwrap();
        // All scores tie, so the lowest id wins.
        assert_eq!(target, Coordinate::new(4, 5));
        let left: Vec<_> = engine.future_targets().collect();
        assert_eq!(left.len(), 3);
        assert!(left.iter().all(|&(c, score)| score == 1 && c != target && expected.contains(&c)));
        assert_eq!(engine.last_targeted(), Some(target));
    }

    #[test]
    fn expert_follows_the_ship_axis() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut engine = TargetingEngine::new(SkillLevel::Expert);
        let first = Coordinate::new(5, 5);
        let second = Coordinate::new(5, 6);
        engine.record_result(first, CellState::ShipPart(ShipKind::Battleship)).unwrap();
        engine.record_result(second, CellState::ShipPart(ShipKind::Battleship)).unwrap();
        engine.last_targeted = Some(first.to_id(DEFAULT_BOARD_SIZE));

        // (5,6) is ship, so its opposite (5,4) gets an extra point.
        let target = engine.find_target(&mut rng).unwrap();
        assert_eq!(target, Coordinate::new(5, 4));
    }

    #[test]
    fn ties_break_towards_the_lowest_cell_id() {
        let mut engine = TargetingEngine::new(SkillLevel::Expert);
        engine.bump_score(Coordinate::new(7, 7));
        engine.bump_score(Coordinate::new(2, 3));
        engine.bump_score(Coordinate::new(4, 0));
        assert_eq!(engine.take_best_future_target(), Some(23));
        assert_eq!(engine.take_best_future_target(), Some(40));
        assert_eq!(engine.take_best_future_target(), Some(77));
        assert_eq!(engine.take_best_future_target(), None);
    }

    #[test]
    fn revealed_candidates_are_discarded() {
        let mut engine = TargetingEngine::new(SkillLevel::Expert);
        let stale = Coordinate::new(0, 1);
        engine.bump_score(stale);
        engine.bump_score(stale);
        engine.bump_score(Coordinate::new(9, 9));
        engine.record_result(stale, CellState::Ocean).unwrap();
        assert_eq!(engine.take_best_future_target(), Some(99));
    }

    #[test]
    fn expert_after_a_miss_uses_queued_targets() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut engine = TargetingEngine::new(SkillLevel::Expert);
        let miss = Coordinate::new(1, 1);
        engine.record_result(miss, CellState::Ocean).unwrap();
        engine.last_targeted = Some(miss.to_id(DEFAULT_BOARD_SIZE));
        engine.bump_score(Coordinate::new(8, 2));
        assert_eq!(engine.find_target(&mut rng).unwrap(), Coordinate::new(8, 2));
    }
}
