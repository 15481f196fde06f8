//! Connect Four engine: depth-limited minimax with alpha-beta pruning over a
//! 7×6 board, plus a small game-session layer.
//! Callers either keep a [`Game`] or describe a position statelessly with a
//! move history string (e.g. `R3Y3R2`) and ask [`best_move`] for the reply.
pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod history;
pub mod rules;
pub mod search;

pub use board::{Board, Cell, Player, HEIGHT, WIDTH};
pub use error::GameError;
pub use eval::{score_position, score_window};
pub use game::{
    best_move, position_status, Game, GameStatus, Mode, MoveOutcome, MoveRequest, MoveResponse,
    StatusResponse,
};
pub use history::{format_history, parse_history, replay, TypedMove};
pub use rules::{has_four_in_a_row, is_terminal, outcome, winning_line, Outcome, Window};
pub use search::{
    analyze, choose_move, search, SearchResult, DEFAULT_DEPTH, MAX_DEPTH, WIN_SCORE,
};
