//! Game sessions and the stateless request API built on the search engine.
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Player};
use crate::error::GameError;
use crate::history::{format_history, parse_history, replay, TypedMove};
use crate::rules::{outcome, Outcome, Window};
use crate::search::{analyze, choose_move, DEFAULT_DEPTH, MAX_DEPTH};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    TwoPlayer,
    /// Yellow is played by the engine.
    VersusAi,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won { winner: Player, line: Window },
    Draw,
}

impl GameStatus {
    pub fn of(board: &Board) -> Self {
        match outcome(board) {
            None => GameStatus::InProgress,
            Some(Outcome::Winner { player, line }) => GameStatus::Won {
                winner: player,
                line,
            },
            Some(Outcome::Draw) => GameStatus::Draw,
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub player: Player,
    pub column: usize,
    pub row: usize,
    pub status: GameStatus,
}

/// A live game. The board is owned here and only replaced by accepted moves;
/// the engine sees it by shared reference.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    mode: Mode,
    ai: Player,
    depth: usize,
    moves: Vec<TypedMove>,
    status: GameStatus,
}

impl Game {
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::Red,
            mode,
            ai: Player::Yellow,
            depth: DEFAULT_DEPTH,
            moves: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    pub fn with_depth(mut self, depth: usize) -> Result<Self, GameError> {
        if !(1..=MAX_DEPTH).contains(&depth) {
            return Err(GameError::DepthOutOfRange(depth));
        }
        self.depth = depth;
        Ok(self)
    }

    pub fn from_history(history: &str, mode: Mode) -> Result<Self, GameError> {
        let moves = parse_history(history)?;
        let (board, to_move) = replay(&moves)?;
        Ok(Self {
            board,
            to_move,
            status: GameStatus::of(&board),
            moves,
            ..Self::new(mode)
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn history(&self) -> String {
        format_history(&self.moves)
    }

    /// Plays a human move for the side to move.
    pub fn play(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if self.mode == Mode::VersusAi && self.to_move == self.ai {
            return Err(GameError::NotYourTurn {
                player: self.ai.opponent(),
            });
        }
        self.apply(column)
    }

    /// Lets the engine play for the side to move. Works in either mode, so a
    /// two-player game can ask for a hint move.
    pub fn play_ai(&mut self) -> Result<MoveOutcome, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        let column = choose_move(&self.board, self.to_move, self.depth)?;
        self.apply(column)
    }

    /// Plays the computer's reply if it is the computer's turn in a
    /// versus-AI game.
    pub fn respond(&mut self) -> Result<Option<MoveOutcome>, GameError> {
        if self.mode != Mode::VersusAi || self.status.is_over() || self.to_move != self.ai {
            return Ok(None);
        }
        self.play_ai().map(Some)
    }

    fn apply(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        let player = self.to_move;
        let (board, row) = self.board.try_drop_piece(column, player)?;
        self.board = board;
        self.moves.push(TypedMove { player, column });
        self.status = GameStatus::of(&self.board);
        self.to_move = player.opponent();
        debug!(%player, column, row, status = ?self.status, "move applied");
        Ok(MoveOutcome {
            player,
            column,
            row,
            status: self.status.clone(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub position: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub column: usize,
    pub score: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub to_move: Player,
    pub legal_moves: Vec<usize>,
    pub status: GameStatus,
}

/// Replays the request's history and searches for the side to move.
pub fn best_move(request: &MoveRequest, depth: usize) -> Result<MoveResponse, GameError> {
    let moves = parse_history(&request.position)?;
    let (board, to_move) = replay(&moves)?;
    let result = analyze(&board, to_move, depth)?;
    let column = result.column.ok_or(GameError::NoMoves)?;
    Ok(MoveResponse {
        column,
        score: result.value,
    })
}

pub fn position_status(history: &str) -> Result<StatusResponse, GameError> {
    let game = Game::from_history(history, Mode::TwoPlayer)?;
    let legal_moves = if game.status.is_over() {
        Vec::new()
    } else {
        game.board.legal_moves()
    };
    Ok(StatusResponse {
        to_move: game.to_move,
        legal_moves,
        status: game.status,
    })
}
