//! Depth-limited minimax with alpha-beta pruning.
//!
//! Values are always from the computer's (`ai`) point of view: maximizing
//! levels are the computer's turns, minimizing levels the opponent's.
//! Candidate columns are visited in ascending order and only a strictly
//! better value replaces the incumbent, so ties go to the lowest column.
use tracing::debug;

use crate::board::{Board, Player};
use crate::error::GameError;
use crate::eval::score_position;
use crate::rules::{has_four_in_a_row, is_terminal};

/// Value of a decided game. Dominates any heuristic score.
pub const WIN_SCORE: i64 = 1_000_000_000_000_000;
pub const DEFAULT_DEPTH: usize = 5;
pub const MAX_DEPTH: usize = 8;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` at leaves, where no move is made.
    pub column: Option<usize>,
    pub value: i64,
}

pub fn search(
    board: &Board,
    ai: Player,
    depth: usize,
    mut alpha: i64,
    mut beta: i64,
    maximizing: bool,
) -> SearchResult {
    let moves = board.legal_moves();
    if depth == 0 || is_terminal(board) {
        return SearchResult {
            column: None,
            value: leaf_value(board, ai, &moves),
        };
    }

    let mut column = moves[0];
    let value = if maximizing {
        let mut best = i64::MIN;
        for &col in &moves {
            let child = board.drop_piece(col, ai);
            let score = search(&child, ai, depth - 1, alpha, beta, false).value;
            if score > best {
                best = score;
                column = col;
            }
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }
        best
    } else {
        let mut best = i64::MAX;
        for &col in &moves {
            let child = board.drop_piece(col, ai.opponent());
            let score = search(&child, ai, depth - 1, alpha, beta, true).value;
            if score < best {
                best = score;
                column = col;
            }
            beta = beta.min(best);
            if alpha >= beta {
                break;
            }
        }
        best
    };

    SearchResult {
        column: Some(column),
        value,
    }
}

fn leaf_value(board: &Board, ai: Player, moves: &[usize]) -> i64 {
    if has_four_in_a_row(board, ai) {
        WIN_SCORE
    } else if has_four_in_a_row(board, ai.opponent()) {
        -WIN_SCORE
    } else if moves.is_empty() {
        0
    } else {
        score_position(board, ai)
    }
}

/// Validates the position and runs a full-window search for `ai`.
pub fn analyze(board: &Board, ai: Player, depth: usize) -> Result<SearchResult, GameError> {
    if !(1..=MAX_DEPTH).contains(&depth) {
        return Err(GameError::DepthOutOfRange(depth));
    }
    if has_four_in_a_row(board, Player::Red) || has_four_in_a_row(board, Player::Yellow) {
        return Err(GameError::GameOver);
    }
    if board.legal_moves().is_empty() {
        return Err(GameError::NoMoves);
    }

    let result = search(board, ai, depth, i64::MIN, i64::MAX, true);
    debug!(?ai, depth, column = ?result.column, value = result.value, "search finished");
    Ok(result)
}

/// Picks the computer's column for `board`, searching `depth` plies.
pub fn choose_move(board: &Board, ai: Player, depth: usize) -> Result<usize, GameError> {
    analyze(board, ai, depth)?.column.ok_or(GameError::NoMoves)
}
