use crate::board::{BOARD_SIZE, Board, in_bounds};
use crate::types::{Axis, Cell, Position, Side};

/// A direction scan stops after this many empty cells.
const MAX_SPACES: u32 = 4;

const OWN_FOUR: f32 = 100.0;
const OPP_FOUR: f32 = 80.0;
const OWN_OPEN_THREE: f32 = 50.0;
const OPP_OPEN_THREE: f32 = 40.0;
const OWN_OPEN_TWO: f32 = 10.0;
const OPP_OPEN_TWO: f32 = 8.0;

/// Markers and empty cells seen along one axis through a candidate cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineCount {
    count: u32,
    space: u32,
}

/// Static score of putting `side` on the empty cell `pos`.
///
/// Sums pattern points over the four axes, for both `side` and its
/// opponent, then adds the centrality bonus.
pub fn evaluate_cell(board: &Board, pos: Position, side: Side) -> f32 {
    let mut score = 0.0f32;

    for axis in Axis::ALL {
        let own = count_axis(board, pos, axis, side);
        let opp = count_axis(board, pos, axis, side.opponent());

        if own.count >= 4 {
            score += OWN_FOUR;
        }
        if opp.count >= 4 {
            score += OPP_FOUR;
        }
        if own.count == 3 && own.space >= 2 {
            score += OWN_OPEN_THREE;
        }
        if opp.count == 3 && opp.space >= 2 {
            score += OPP_OPEN_THREE;
        }
        if own.count == 2 && own.space >= 3 {
            score += OWN_OPEN_TWO;
        }
        if opp.count == 2 && opp.space >= 3 {
            score += OPP_OPEN_TWO;
        }
    }

    score + centrality_bonus(pos)
}

/// `(size - manhattan distance to the true centre) / 2`.
pub fn centrality_bonus(pos: Position) -> f32 {
    let center = BOARD_SIZE as f32 / 2.0;
    let dist = (pos.row as f32 - center).abs() + (pos.col as f32 - center).abs();
    (BOARD_SIZE as f32 - dist) / 2.0
}

/// Both signed directions of `axis`; the candidate itself counts as one.
fn count_axis(board: &Board, pos: Position, axis: Axis, side: Side) -> LineCount {
    let (dr, dc) = axis.step();
    let forward = count_direction(board, pos, dr, dc, side);
    let backward = count_direction(board, pos, -dr, -dc, side);

    LineCount {
        count: 1 + forward.count + backward.count,
        space: forward.space + backward.space,
    }
}

// `side` cells keep counting past gaps; only the other colour or the edge
// ends the scan.
fn count_direction(board: &Board, pos: Position, dr: i32, dc: i32, side: Side) -> LineCount {
    let mut line = LineCount { count: 0, space: 0 };
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;

    while in_bounds(r, c) && line.space < MAX_SPACES {
        match board.get(r as u8, c as u8) {
            Some(cell) if cell.is(side) => line.count += 1,
            Some(Cell::Empty) => line.space += 1,
            _ => break,
        }
        r += dr;
        c += dc;
    }

    line
}
