use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use web_time::{SystemTime, UNIX_EPOCH};

use crate::ai::heuristic::evaluate_cell;
use crate::board::{BOARD_SIZE, Board};
use crate::types::{Position, Side};

/// Inclusive bounds of the central sub-square searched first:
/// `floor(size * 0.3)..=floor(size * 0.7)`.
const CENTER_START: usize = BOARD_SIZE * 3 / 10;
const CENTER_END: usize = BOARD_SIZE * 7 / 10;
/// Below this best central score the search widens to the outer ring.
const WIDEN_THRESHOLD: f32 = 10.0;

pub trait MoveSelector: Send + Sync {
    /// Picks a cell for `side`, or `None` when the board has no empty cell.
    fn select_move(&self, board: &Board, side: Side) -> Option<Position>;
}

/// Win, then block, then positional score; random empty cell as a last resort.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicSelector {
    seed: u64,
}

impl HeuristicSelector {
    /// Seeds the random fallback from the wall clock.
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for HeuristicSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for HeuristicSelector {
    fn select_move(&self, board: &Board, side: Side) -> Option<Position> {
        if let Some(pos) = find_completing_move(board, side) {
            debug!("[Selector] {side:?} wins at {pos:?}");
            return Some(pos);
        }

        if let Some(pos) = find_completing_move(board, side.opponent()) {
            debug!("[Selector] {side:?} blocks at {pos:?}");
            return Some(pos);
        }

        if let Some(pos) = find_positional_move(board, side) {
            debug!("[Selector] {side:?} positional move at {pos:?}");
            return Some(pos);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed ^ board.empty_count() as u64);
        random_empty_cell(board, &mut rng)
    }
}

/// First empty cell, row-major, where `side` would make five or more.
pub fn find_completing_move(board: &Board, side: Side) -> Option<Position> {
    board
        .empty_cells()
        .into_iter()
        .find(|&pos| board.is_winning_placement(pos, side))
}

/// Highest [`evaluate_cell`] score, searching the central sub-square first
/// and the rest of the board only when the centre scores below
/// [`WIDEN_THRESHOLD`]. Ties keep the earliest cell in scan order.
pub fn find_positional_move(board: &Board, side: Side) -> Option<Position> {
    let (central, outer): (Vec<Position>, Vec<Position>) =
        board.empty_cells().into_iter().partition(|&pos| is_central(pos));

    let mut best = None;
    scan_best(board, side, central, &mut best);
    let best_central = best.map_or(f32::NEG_INFINITY, |(_, score)| score);
    if best_central < WIDEN_THRESHOLD {
        scan_best(board, side, outer, &mut best);
    }

    best.map(|(pos, _)| pos)
}

fn scan_best(
    board: &Board,
    side: Side,
    cells: Vec<Position>,
    best: &mut Option<(Position, f32)>,
) {
    for pos in cells {
        let score = evaluate_cell(board, pos, side);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            *best = Some((pos, score));
        }
    }
}

/// Uniformly random empty cell.
pub fn random_empty_cell<R: Rng>(board: &Board, rng: &mut R) -> Option<Position> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        None
    } else {
        Some(empty[rng.random_range(0..empty.len())])
    }
}

fn is_central(pos: Position) -> bool {
    (CENTER_START..=CENTER_END).contains(&(pos.row as usize))
        && (CENTER_START..=CENTER_END).contains(&(pos.col as usize))
}
