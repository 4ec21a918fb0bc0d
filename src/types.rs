use serde::Serialize;

/// One of the two competing markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Green,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Red => Side::Green,
            Side::Green => Side::Red,
        }
    }
}

/// Occupancy of a single grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Green,
}

impl Cell {
    pub fn is(self, side: Side) -> bool {
        self == Cell::from(side)
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Wire encoding used by `GameState::board`: 0=empty, 1=red, 2=green.
    pub fn to_u8(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Red => 1,
            Cell::Green => 2,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Red => Cell::Red,
            Side::Green => Cell::Green,
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Direction a line of five runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right.
    DiagonalRight,
    /// Top-right to bottom-left.
    DiagonalLeft,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalRight,
        Axis::DiagonalLeft,
    ];

    /// Forward `(d_row, d_col)` step. Every forward step moves later in
    /// row-major order.
    pub fn step(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalRight => (1, 1),
            Axis::DiagonalLeft => (1, -1),
        }
    }
}

/// Canonical identifier of a line of five: its cells sorted row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LineId([Position; 5]);

impl LineId {
    pub fn new(mut cells: [Position; 5]) -> Self {
        cells.sort_unstable();
        Self(cells)
    }

    pub fn cells(&self) -> &[Position; 5] {
        &self.0
    }

    pub fn start(&self) -> Position {
        self.0[0]
    }

    pub fn end(&self) -> Position {
        self.0[4]
    }
}

/// A completed line of five, as reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScoredLine {
    pub side: Side,
    pub axis: Axis,
    pub cells: LineId,
}

/// Who plays Green.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    #[default]
    TwoPlayer,
    VsComputer,
}

/// Final outcome, decided by cumulative line counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    RedWins,
    GreenWins,
    Draw,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub board: Vec<u8>,
    pub current_player: Side,
    pub red_score: u32,
    pub green_score: u32,
    pub is_game_over: bool,
    pub mode: GameMode,
    pub last_move: Option<Position>,
    /// Lines credited by the most recent move only.
    pub new_lines: Vec<ScoredLine>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub outcome: Outcome,
    pub red_score: u32,
    pub green_score: u32,
}
