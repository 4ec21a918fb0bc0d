/// Errors raised when a move cannot be applied.
///
/// None of these leave the board or scores modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("row/col out of range: ({row}, {col})")]
    OutOfRange { row: u8, col: u8 },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },

    #[error("game is already over")]
    GameOver,

    #[error("it is not the player's turn")]
    NotYourTurn,

    #[error("game has no computer opponent")]
    NoComputerOpponent,

    #[error("computer selected an unplayable cell ({row}, {col})")]
    InvalidSelection { row: u8, col: u8 },
}
