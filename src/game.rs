use std::collections::HashSet;

use log::{debug, info, warn};

use crate::ai::{HeuristicSelector, MoveSelector};
use crate::board::Board;
use crate::error::GameError;
use crate::types::{
    Cell, GameMode, GameResult, GameState, LineId, Outcome, Position, ScoredLine, Side,
};

/// Side played by the computer in [`GameMode::VsComputer`].
pub const COMPUTER_SIDE: Side = Side::Green;
/// Pause the presentation layer leaves before applying the computer's move.
pub const COMPUTER_MOVE_DELAY_MS: u32 = 500;

/// Number of distinct lines of five credited to each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub red: u32,
    pub green: u32,
}

impl Scores {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Red => self.red,
            Side::Green => self.green,
        }
    }

    fn credit(&mut self, side: Side) {
        match side {
            Side::Red => self.red += 1,
            Side::Green => self.green += 1,
        }
    }
}

/// One game from the first move to game over, owned by whoever drives turns.
pub struct GameInstance {
    board: Board,
    pub current_player: Side,
    pub mode: GameMode,
    pub is_game_over: bool,
    pub last_move: Option<Position>,
    /// Lines credited by the most recent move.
    pub new_lines: Vec<ScoredLine>,
    scores: Scores,
    scored_lines: HashSet<LineId>,
    selector: Box<dyn MoveSelector>,
}

impl GameInstance {
    pub fn new(mode: GameMode, selector: Box<dyn MoveSelector>) -> Self {
        Self {
            board: Board::new(),
            current_player: Side::Red,
            mode,
            is_game_over: false,
            last_move: None,
            new_lines: Vec::new(),
            scores: Scores::default(),
            scored_lines: HashSet::new(),
            selector,
        }
    }

    pub fn new_with_default_selector(mode: GameMode) -> Self {
        Self::new(mode, Box::new(HeuristicSelector::new()))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Human move for the side to play.
    pub fn place(&mut self, row: u8, col: u8) -> Result<(), GameError> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(GameError::NotYourTurn);
        }

        self.apply_move(Position::new(row, col), self.current_player)
    }

    /// False once the game is over.
    pub fn is_computer_turn(&self) -> bool {
        !self.is_game_over
            && self.mode == GameMode::VsComputer
            && self.current_player == COMPUTER_SIDE
    }

    /// Lets the selector play the computer's turn.
    ///
    /// `Ok(None)` means the selector found no move; the game is over.
    pub fn do_ai_move(&mut self) -> Result<Option<Position>, GameError> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if self.mode != GameMode::VsComputer {
            return Err(GameError::NoComputerOpponent);
        }
        if self.current_player != COMPUTER_SIDE {
            return Err(GameError::NotYourTurn);
        }

        let Some(pos) = self.selector.select_move(&self.board, COMPUTER_SIDE) else {
            info!("[Game] Computer has no move, ending game");
            self.end_game();
            return Ok(None);
        };

        if self.board.get(pos.row, pos.col) != Some(Cell::Empty) {
            warn!("[Game] Selector returned unplayable cell {pos:?}");
            return Err(GameError::InvalidSelection {
                row: pos.row,
                col: pos.col,
            });
        }

        self.apply_move(pos, COMPUTER_SIDE)?;
        Ok(Some(pos))
    }

    /// Back to an empty board with Red to move. The mode is kept.
    pub fn reset(&mut self) {
        info!("[Game] Reset ({:?})", self.mode);
        self.board = Board::new();
        self.current_player = Side::Red;
        self.is_game_over = false;
        self.last_move = None;
        self.new_lines.clear();
        self.scores = Scores::default();
        self.scored_lines.clear();
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player,
            red_score: self.scores.red,
            green_score: self.scores.green,
            is_game_over: self.is_game_over,
            mode: self.mode,
            last_move: self.last_move,
            new_lines: self.new_lines.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let Scores { red, green } = self.scores;
        GameResult {
            outcome: if red > green {
                Outcome::RedWins
            } else if green > red {
                Outcome::GreenWins
            } else {
                Outcome::Draw
            },
            red_score: red,
            green_score: green,
        }
    }

    fn end_game(&mut self) {
        self.is_game_over = true;
        info!(
            "[Game] Over: red {} - green {}",
            self.scores.red, self.scores.green
        );
    }

    fn apply_move(&mut self, pos: Position, side: Side) -> Result<(), GameError> {
        self.board.place(pos.row, pos.col, side)?;
        self.last_move = Some(pos);
        self.new_lines = self.credit_new_lines(side);

        // Reachability is checked for the side that just moved.
        if self.board.is_full() || !self.board.has_any_plausible_move(side) {
            self.end_game();
        } else {
            self.current_player = side.opponent();
        }

        Ok(())
    }

    fn credit_new_lines(&mut self, side: Side) -> Vec<ScoredLine> {
        let mut credited = Vec::new();
        for line in self.board.detect_completed_lines(side) {
            if self.scored_lines.insert(line.cells) {
                self.scores.credit(side);
                debug!(
                    "[Game] {side:?} scores {:?} line {:?}-{:?}",
                    line.axis,
                    line.cells.start(),
                    line.cells.end()
                );
                credited.push(line);
            }
        }
        credited
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Side) {
        self.board = board;
        self.current_player = current_player;
        self.is_game_over = false;
        self.last_move = None;
        self.new_lines.clear();
    }
}
