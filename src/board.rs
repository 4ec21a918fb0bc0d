use once_cell::sync::Lazy;

use crate::error::GameError;
use crate::types::{Axis, Cell, LineId, Position, ScoredLine, Side};

pub const BOARD_SIZE: usize = 10;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
pub const WIN_LENGTH: usize = 5;

/// Five consecutive in-bounds cells along one axis.
#[derive(Debug, Clone, Copy)]
struct Window {
    axis: Axis,
    cells: [usize; WIN_LENGTH],
}

/// Every five-cell window on the board, ordered by start square then axis.
static WINDOWS: Lazy<Vec<Window>> = Lazy::new(|| {
    let mut windows = Vec::new();
    for start in 0..NUM_SQUARES {
        let (row, col) = pos_to_row_col(start);
        for axis in Axis::ALL {
            let (dr, dc) = axis.step();
            let mut cells = [0usize; WIN_LENGTH];
            let mut fits = true;
            for (i, cell) in cells.iter_mut().enumerate() {
                let r = row + dr * i as i32;
                let c = col + dc * i as i32;
                if !in_bounds(r, c) {
                    fits = false;
                    break;
                }
                *cell = idx(r, c);
            }
            if fits {
                windows.push(Window { axis, cells });
            }
        }
    }
    windows
});

/// 10x10 grid of cell occupancy, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; NUM_SQUARES],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; NUM_SQUARES],
        }
    }

    /// Returns the cell at `(row, col)`, or `None` off the board.
    pub fn get(&self, row: u8, col: u8) -> Option<Cell> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(self.cells[row as usize * BOARD_SIZE + col as usize])
        } else {
            None
        }
    }

    /// Puts `side` on an empty cell.
    /// The board is left untouched when the cell is occupied or off the board.
    pub fn place(&mut self, row: u8, col: u8, side: Side) -> Result<(), GameError> {
        match self.get(row, col) {
            None => Err(GameError::OutOfRange { row, col }),
            Some(Cell::Empty) => {
                self.cells[row as usize * BOARD_SIZE + col as usize] = side.into();
                Ok(())
            }
            Some(_) => Err(GameError::Occupied { row, col }),
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| to_position(pos))
            .collect()
    }

    /// True when some empty cell sits in a five-cell window whose other
    /// cells are all empty or already `side`, i.e. `side` could still
    /// complete a line there.
    pub fn has_any_plausible_move(&self, side: Side) -> bool {
        WINDOWS.iter().any(|window| {
            let cells = window.cells.map(|pos| self.cells[pos]);
            cells.iter().any(|cell| cell.is_empty())
                && cells.iter().all(|cell| cell.is_empty() || cell.is(side))
        })
    }

    /// Every five-cell window filled by `side`.
    ///
    /// A run longer than five yields one line per starting square, so a run
    /// of six reports two overlapping lines. Callers drop ids they already
    /// credited.
    pub fn detect_completed_lines(&self, side: Side) -> Vec<ScoredLine> {
        WINDOWS
            .iter()
            .filter(|window| window.cells.iter().all(|&pos| self.cells[pos].is(side)))
            .map(|window| ScoredLine {
                side,
                axis: window.axis,
                cells: LineId::new(window.cells.map(to_position)),
            })
            .collect()
    }

    /// True when `side` on `pos` would make a run of five or more.
    /// Whatever currently occupies `pos` is ignored.
    pub fn is_winning_placement(&self, pos: Position, side: Side) -> bool {
        let row = pos.row as i32;
        let col = pos.col as i32;
        if !in_bounds(row, col) {
            return false;
        }

        Axis::ALL.into_iter().any(|axis| {
            let (dr, dc) = axis.step();
            let mut count = 1;
            for (dr, dc) in [(dr, dc), (-dr, -dc)] {
                let mut r = row + dr;
                let mut c = col + dc;
                while in_bounds(r, c) && self.cells[idx(r, c)].is(side) {
                    count += 1;
                    r += dr;
                    c += dc;
                }
            }
            count >= WIN_LENGTH
        })
    }

    /// Converts board to `[u8; 100]` where 0=empty, 1=red, 2=green.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        self.cells.map(Cell::to_u8)
    }

    /// Builds a board from text rows: `.` empty, `R` red, `G` green.
    /// Missing rows and columns are empty.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                board.cells[row * BOARD_SIZE + col] = match ch {
                    'R' => Cell::Red,
                    'G' => Cell::Green,
                    _ => Cell::Empty,
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn idx(row: i32, col: i32) -> usize {
    row as usize * BOARD_SIZE + col as usize
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / BOARD_SIZE) as i32, (pos % BOARD_SIZE) as i32)
}

fn to_position(pos: usize) -> Position {
    Position::new((pos / BOARD_SIZE) as u8, (pos % BOARD_SIZE) as u8)
}

pub(crate) fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cells: [(u8, u8); 5]) -> LineId {
        LineId::new(cells.map(|(row, col)| Position::new(row, col)))
    }

    #[test]
    fn window_table_covers_every_line_of_five() {
        // 60 horizontal + 60 vertical + 36 per diagonal.
        assert_eq!(WINDOWS.len(), 192);
    }

    #[test]
    fn place_rejects_occupied_and_out_of_range_cells() {
        let mut board = Board::new();
        board.place(3, 4, Side::Red).unwrap();
        let before = board;

        assert_eq!(
            board.place(3, 4, Side::Green),
            Err(GameError::Occupied { row: 3, col: 4 })
        );
        assert_eq!(
            board.place(10, 0, Side::Green),
            Err(GameError::OutOfRange { row: 10, col: 0 })
        );
        assert_eq!(board, before);
        assert_eq!(board.get(3, 4), Some(Cell::Red));
        assert_eq!(board.empty_count(), 99);
    }

    #[test]
    fn is_full_only_without_empty_cells() {
        let mut board = Board::new();
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                assert!(!board.is_full());
                let side = if (row + col) % 2 == 0 { Side::Red } else { Side::Green };
                board.place(row, col, side).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn detects_exact_five_in_every_axis() {
        let board = Board::from_rows(&[
            "RRRRR.....",
            "G....G....",
            "G.....G...",
            "G......G..",
            "G.......G.",
            "G........G",
        ]);

        let red = board.detect_completed_lines(Side::Red);
        assert_eq!(red.len(), 1);
        assert_eq!(red[0].axis, Axis::Horizontal);
        assert_eq!(red[0].cells, line([(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]));

        let green = board.detect_completed_lines(Side::Green);
        let axes: Vec<Axis> = green.iter().map(|l| l.axis).collect();
        assert_eq!(axes, vec![Axis::Vertical, Axis::DiagonalRight]);
        assert_eq!(green[0].cells, line([(1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]));
        assert_eq!(green[1].cells, line([(1, 5), (2, 6), (3, 7), (4, 8), (5, 9)]));
    }

    #[test]
    fn detects_anti_diagonal_sorted() {
        let board = Board::from_rows(&[
            "",
            "",
            "......R",
            ".....R",
            "....R",
            "...R",
            "..R",
        ]);

        let lines = board.detect_completed_lines(Side::Red);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].axis, Axis::DiagonalLeft);
        assert_eq!(lines[0].cells.start(), Position::new(2, 6));
        assert_eq!(lines[0].cells.end(), Position::new(6, 2));
    }

    #[test]
    fn four_in_a_row_is_not_a_line() {
        let board = Board::from_rows(&["RRRR.R"]);

        assert!(board.detect_completed_lines(Side::Red).is_empty());
    }

    #[test]
    fn run_of_six_yields_one_line_per_start() {
        let board = Board::from_rows(&["", "", "", "..GGGGGG"]);

        let lines = board.detect_completed_lines(Side::Green);

        assert_eq!(
            lines.iter().map(|l| l.cells).collect::<Vec<_>>(),
            vec![
                line([(3, 2), (3, 3), (3, 4), (3, 5), (3, 6)]),
                line([(3, 3), (3, 4), (3, 5), (3, 6), (3, 7)]),
            ]
        );
    }

    #[test]
    fn winning_placement_counts_both_directions() {
        let board = Board::from_rows(&["", "", "", "", "RR.RR"]);

        assert!(board.is_winning_placement(Position::new(4, 2), Side::Red));
        assert!(!board.is_winning_placement(Position::new(4, 2), Side::Green));
        assert!(!board.is_winning_placement(Position::new(4, 5), Side::Red));
        assert!(!board.is_winning_placement(Position::new(12, 0), Side::Red));
    }

    #[test]
    fn no_plausible_move_when_every_window_is_blocked() {
        // Green on every square with an even row or even column, red on the
        // rest. Every window through an empty square holds both colours.
        let mut board = Board::new();
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let side = if row % 2 == 0 || col % 2 == 0 {
                    Side::Green
                } else {
                    Side::Red
                };
                if (row, col) != (1, 1) && (row, col) != (7, 5) {
                    board.place(row, col, side).unwrap();
                }
            }
        }

        assert!(!board.is_full());
        assert!(!board.has_any_plausible_move(Side::Red));
        assert!(!board.has_any_plausible_move(Side::Green));
    }

    #[test]
    fn plausible_move_depends_on_the_side_asked() {
        // Row 1 reads G.G.G: green can still fill it, red never can.
        let mut board = Board::new();
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let side = if row % 2 == 0 || col % 2 == 0 {
                    Side::Green
                } else {
                    Side::Red
                };
                if (row, col) != (1, 1) && (row, col) != (1, 3) {
                    board.place(row, col, side).unwrap();
                }
            }
        }

        assert!(!board.has_any_plausible_move(Side::Red));
        assert!(board.has_any_plausible_move(Side::Green));
    }

    #[test]
    fn empty_board_has_plausible_moves_for_both_sides() {
        let board = Board::new();

        assert!(board.has_any_plausible_move(Side::Red));
        assert!(board.has_any_plausible_move(Side::Green));
    }

    #[test]
    fn to_array_encodes_cells() {
        let board = Board::from_rows(&["RG"]);
        let cells = board.to_array();

        assert_eq!(&cells[..3], &[1, 2, 0]);
    }
}
