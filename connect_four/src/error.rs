use thiserror::Error;

use crate::board::Player;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move string at position {position}: {reason}")]
    ParseMove { position: usize, reason: String },
    #[error("column {column} is full")]
    ColumnFull { column: usize },
    #[error("column {column} is out of bounds")]
    ColumnOutOfBounds { column: usize },
    #[error("no legal moves remain")]
    NoMoves,
    #[error("the game is already over")]
    GameOver,
    #[error("it is not {player}'s turn")]
    NotYourTurn { player: Player },
    #[error("depth {0} is out of range (1-{})", crate::search::MAX_DEPTH)]
    DepthOutOfRange(usize),
    #[error("piece at row {row}, column {column} is floating above an empty cell")]
    FloatingPiece { row: usize, column: usize },
    #[error("invalid board: {0}")]
    InvalidBoard(String),
}
